fn main() {
    println!("cargo:rustc-link-arg=-Tdefmt.x");
    println!("cargo:rustc-link-arg-tests=-Tembedded-test.x");
    // linkall.x has to come last
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}
