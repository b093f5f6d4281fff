fn main() {
    #[cfg(windows)]
    {
        let icon = "assets/icons/lightspire.ico";
        if std::path::Path::new(icon).exists() {
            let mut res = winresource::WindowsResource::new();
            res.set_icon(icon);
            res.compile().unwrap();
        } else {
            println!("cargo:warning={icon} not found, building without an embedded icon");
        }
    }
}
