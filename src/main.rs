fn main() {
    society_portal::run();
}
