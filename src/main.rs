fn main() {
    path_discovery::app::cli::run();
}
