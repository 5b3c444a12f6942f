fn main() {
    provisio::app::cli::run();
}
