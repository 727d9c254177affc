//! End-of-run recap printed after a successful configuration.

use crate::domain::Configuration;

/// Render the configuration summary and next steps.
pub fn render(config: &Configuration) -> String {
    let https = if config.use_https() { "Yes" } else { "No" };
    let mut out = String::from("\n📋 Configuration Summary:\n");

    out.push_str(&format!("   Project Path: {}\n", config.project_path().display()));
    out.push_str(&format!("   Application Port: {}\n", config.port()));
    out.push_str(&format!("   Application Name: {}\n", config.app_name()));
    out.push_str(&format!("   HTTPS Enabled: {}\n", https));
    out.push_str(&format!("   Configuration Type: {}\n", config.mode_label()));

    out.push_str("\n🌐 Your application should now be accessible at:\n");
    out.push_str("   HTTP: http://your-domain.com\n");
    if config.use_https() {
        out.push_str("   HTTPS: https://your-domain.com\n");
    }

    out.push_str("\n💡 Next steps:\n");
    out.push_str(&format!(
        "   1. Make sure your Node.js application is running on port {}\n",
        config.port()
    ));
    out.push_str("   2. Ensure your domain points to this server\n");
    out.push_str("   3. If using HTTPS, verify SSL certificates are properly configured\n");

    out
}
