#[cfg(feature = "version")]
fn main() {
    shadow_rs::ShadowBuilder::builder().build().unwrap();
}

#[cfg(not(feature = "version"))]
fn main() {}
