fn main() {
    titan_periodic_table::platform::start();
}
