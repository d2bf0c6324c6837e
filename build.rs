fn main() {
    println!("cargo:rerun-if-changed=cfg.toml");

    // ホストでのテストビルドでは ESP-IDF の環境は不要
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("espidf") {
        return;
    }

    if !std::path::Path::new("cfg.toml").exists() {
        panic!("cfg.toml が見つかりません。cfg.toml.example をコピーして作成してください。");
    }

    embuild::espidf::sysenv::output();
}
