fn main() {
    bakery_api::main();
}
