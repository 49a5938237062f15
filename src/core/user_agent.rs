/// `thor <version> (<os type>; <os version>)`
pub fn user_agent() -> String {
    let info = os_info::get();
    let os_type = info.os_type();
    let os_version = info.version().to_string();
    let app_name = env!("CARGO_PKG_NAME");
    let app_version = env!("CARGO_PKG_VERSION");
    format!("{} {} ({}; {})", app_name, app_version, os_type, os_version)
}
