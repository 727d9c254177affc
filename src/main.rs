fn main() {
    apache_node_proxy::app::cli::run();
}
