fn main() {
    fakestore_pwa::run();
}
