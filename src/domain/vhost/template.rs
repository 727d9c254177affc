use std::path::Path;

use minijinja::{Environment, Value, context};

use crate::domain::{AppError, ProxyPort};

const HTTP_TEMPLATE_NAME: &str = "http-vhost.conf";
const HTTPS_TEMPLATE_NAME: &str = "https-vhost.conf";

const HTTP_TEMPLATE: &str = r#"<VirtualHost _default_:80>
  ServerAlias *
  DocumentRoot "{{ project_path }}"
  <Directory "{{ project_path }}">
    Require all granted
  </Directory>
  ProxyPass / http://localhost:{{ port }}/
  ProxyPassReverse / http://localhost:{{ port }}/
</VirtualHost>"#;

const HTTPS_TEMPLATE: &str = r#"<VirtualHost _default_:443>
  ServerAlias *
  SSLEngine on
  SSLCertificateFile "{{ cert_file }}"
  SSLCertificateKeyFile "{{ cert_key_file }}"
  DocumentRoot "{{ project_path }}"
  <Directory "{{ project_path }}">
    Require all granted
  </Directory>
  ProxyPass / http://localhost:{{ port }}/
  ProxyPassReverse / http://localhost:{{ port }}/
</VirtualHost>"#;

fn build_template_environment() -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    // Paths and ports are substituted verbatim.
    env.set_auto_escape_callback(|_| minijinja::AutoEscape::None);

    for (name, source) in
        [(HTTP_TEMPLATE_NAME, HTTP_TEMPLATE), (HTTPS_TEMPLATE_NAME, HTTPS_TEMPLATE)]
    {
        env.add_template(name, source).map_err(|e| AppError::Template {
            name: name.to_string(),
            details: e.to_string(),
        })?;
    }

    Ok(env)
}

fn render_template_by_name(template_name: &str, ctx: Value) -> Result<String, AppError> {
    let env = build_template_environment()?;
    let template = env.get_template(template_name).map_err(|e| AppError::Template {
        name: template_name.to_string(),
        details: e.to_string(),
    })?;

    template.render(ctx).map_err(|e| AppError::Template {
        name: template_name.to_string(),
        details: e.to_string(),
    })
}

/// Render the port-80 block proxying to `localhost:<port>`.
pub fn render_http(project_path: &Path, port: ProxyPort) -> Result<String, AppError> {
    render_template_by_name(
        HTTP_TEMPLATE_NAME,
        context! {
            project_path => project_path.display().to_string(),
            port => port.get(),
        },
    )
}

/// Render the port-443 block with `SSLEngine on` and the given certificate pair.
pub fn render_https(
    project_path: &Path,
    port: ProxyPort,
    cert_file: &Path,
    cert_key_file: &Path,
) -> Result<String, AppError> {
    render_template_by_name(
        HTTPS_TEMPLATE_NAME,
        context! {
            project_path => project_path.display().to_string(),
            port => port.get(),
            cert_file => cert_file.display().to_string(),
            cert_key_file => cert_key_file.display().to_string(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EXPECTED_HTTP: &str = "<VirtualHost _default_:80>
  ServerAlias *
  DocumentRoot \"/opt/bitnami/projects/testapp\"
  <Directory \"/opt/bitnami/projects/testapp\">
    Require all granted
  </Directory>
  ProxyPass / http://localhost:3000/
  ProxyPassReverse / http://localhost:3000/
</VirtualHost>";

    const EXPECTED_HTTPS: &str = "<VirtualHost _default_:443>
  ServerAlias *
  SSLEngine on
  SSLCertificateFile \"/opt/bitnami/apache/conf/bitnami/certs/server.crt\"
  SSLCertificateKeyFile \"/opt/bitnami/apache/conf/bitnami/certs/server.key\"
  DocumentRoot \"/opt/bitnami/projects/testapp\"
  <Directory \"/opt/bitnami/projects/testapp\">
    Require all granted
  </Directory>
  ProxyPass / http://localhost:3000/
  ProxyPassReverse / http://localhost:3000/
</VirtualHost>";

    fn port(value: u32) -> ProxyPort {
        ProxyPort::new(value).unwrap()
    }

    #[test]
    fn http_block_matches_reference_output() {
        let rendered = render_http(Path::new("/opt/bitnami/projects/testapp"), port(3000)).unwrap();
        assert_eq!(rendered, EXPECTED_HTTP);
    }

    #[test]
    fn https_block_matches_reference_output() {
        let rendered = render_https(
            Path::new("/opt/bitnami/projects/testapp"),
            port(3000),
            Path::new("/opt/bitnami/apache/conf/bitnami/certs/server.crt"),
            Path::new("/opt/bitnami/apache/conf/bitnami/certs/server.key"),
        )
        .unwrap();
        assert_eq!(rendered, EXPECTED_HTTPS);
    }

    #[test]
    fn rendered_blocks_have_no_trailing_newline() {
        let rendered = render_http(Path::new("/srv/app"), port(80)).unwrap();
        assert!(rendered.ends_with("</VirtualHost>"));
    }

    #[test]
    fn html_sensitive_characters_are_not_escaped() {
        let rendered = render_http(Path::new("/srv/a&b <c>"), port(8080)).unwrap();
        assert!(rendered.contains("DocumentRoot \"/srv/a&b <c>\""));
    }

    proptest! {
        #[test]
        fn http_block_substitutes_port_and_path(
            value in 1u32..=65535,
            path in "/[a-zA-Z0-9_./-]{0,40}",
        ) {
            let rendered = render_http(Path::new(&path), port(value)).unwrap();
            let document_root = format!("  DocumentRoot \"{}\"", path);
            let directory = format!("  <Directory \"{}\">", path);
            let proxy_pass = format!("  ProxyPass / http://localhost:{}/", value);
            let proxy_pass_reverse = format!("  ProxyPassReverse / http://localhost:{}/", value);
            let lines: Vec<&str> = rendered.lines().collect();
            prop_assert_eq!(lines[2], document_root.as_str());
            prop_assert_eq!(lines[3], directory.as_str());
            prop_assert_eq!(lines[6], proxy_pass.as_str());
            prop_assert_eq!(lines[7], proxy_pass_reverse.as_str());
        }
    }
}
