//! The impls and functions
//!
use std::{fmt, sync::Mutex, time::Instant};
use log::*;
use anyhow::{anyhow, bail, Context, Result};
use crate::utility;
use crate::versions::{ServerVersion, VersionResolver};

impl ServerVersion {
    pub fn new(
        major: u64,
        minor: u64,
        patch: u64,
    ) -> Self
    {
        ServerVersion { major, minor, patch }
    }
    /// Parse a version string such as `12.0.0` or `11.1.3-1`.
    ///
    /// Every component must start with a number; trailing text after the number is ignored.
    /// Components after the third are ignored.
    /// Fewer than three components is an error, the classification needs all three.
    pub fn parse(
        version: &str,
    ) -> Result<ServerVersion>
    {
        let components: Vec<&str> = version.split('.').collect();
        if components.len() < 3 {
            return Err(anyhow!("Version {:?} does not have major, minor and patch components", version));
        }
        let mut numbers = [0_u64; 3];
        for (number, component) in numbers.iter_mut().zip(components.iter()) {
            *number = leading_number(version, component)?;
        }
        Ok(ServerVersion::new(numbers[0], numbers[1], numbers[2]))
    }
    /// Parse the body of `/version`: the version is the last whitespace separated token of the first line.
    pub fn parse_version_body(
        http_data: &str,
    ) -> Result<ServerVersion>
    {
        let version = http_data.lines()
            .next()
            .and_then(|line| line.split_whitespace().next_back())
            .ok_or_else(|| anyhow!("Empty /version response"))?;
        ServerVersion::parse(version)
    }
    /// The standard Chef Server API serves user ACLs after 11.0.1.
    ///
    /// Versions below 11, and 11.0.0 and 11.0.1 need the account service or have to skip user ACLs.
    pub fn supports_standard_acl_endpoint(&self) -> bool
    {
        !(self.major < 11 || (self.major == 11 && self.minor == 0 && self.patch <= 1))
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

fn leading_number(
    version: &str,
    component: &str,
) -> Result<u64>
{
    let digits: String = component.chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        bail!("Version {:?}: component {:?} is not numeric", version, component);
    }
    digits.parse()
        .with_context(|| format!("Version {:?}: component {:?} is out of range", version, component))
}

impl VersionResolver {
    pub fn new(
        server_root: &str,
    ) -> Self
    {
        VersionResolver {
            server_root: server_root.trim_end_matches('/').to_string(),
            cached: Mutex::new(None),
        }
    }
    pub fn server_root(&self) -> &str {
        &self.server_root
    }
    /// Return the server version, reading `/version` on first use.
    ///
    /// A failed read is not cached; the error is returned to the caller.
    pub fn resolve(&self) -> Result<ServerVersion>
    {
        let mut cached = self.cached.lock()
            .map_err(|_| anyhow!("Server version cache lock poisoned"))?;
        if let Some(version) = *cached {
            debug!("cached server version: {}", version);
            return Ok(version);
        }

        info!("begin version read");
        let timer = Instant::now();

        let url = format!("{}/version", self.server_root);
        let http_data = utility::http_get(&url)?;
        let version = ServerVersion::parse_version_body(&http_data)
            .with_context(|| format!("Unable to parse server version from {}", url))?;
        *cached = Some(version);

        info!("end version read: {} {:?}", version, timer.elapsed());
        Ok(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::Arc, thread};

    #[test]
    fn unit_parse_open_source_version_body() {
        let body = "Chef Server 12.0.0\nupstream 12.0.0\n";
        assert_eq!(ServerVersion::parse_version_body(body).unwrap(), ServerVersion::new(12, 0, 0));
    }

    #[test]
    fn unit_parse_enterprise_version_body() {
        // Enterprise Chef appends the package iteration.
        let body = r#"enterprise-chef 11.1.3-1

Component            Installed Version   Version GUID
---------------------------------------------------------
"#;
        assert_eq!(ServerVersion::parse_version_body(body).unwrap(), ServerVersion::new(11, 1, 3));
    }

    #[test]
    fn unit_parse_ignores_extra_components_and_trailing_data() {
        assert_eq!(ServerVersion::parse("12.4.1.2").unwrap(), ServerVersion::new(12, 4, 1));
        assert_eq!(ServerVersion::parse("12.0.0+20150101").unwrap(), ServerVersion::new(12, 0, 0));
        assert_eq!(ServerVersion::parse("11.0rc.2").unwrap(), ServerVersion::new(11, 0, 2));
    }

    #[test]
    fn unit_parse_rejects_malformed_versions() {
        assert!(ServerVersion::parse("11.0").is_err());
        assert!(ServerVersion::parse("12").is_err());
        assert!(ServerVersion::parse("v.1.2").is_err());
        assert!(ServerVersion::parse("12.x.0").is_err());
        assert!(ServerVersion::parse_version_body("").is_err());
        assert!(ServerVersion::parse_version_body("\nChef Server 12.0.0").is_err());
    }

    #[test]
    fn unit_parse_reports_out_of_range_components() {
        let error = ServerVersion::parse("99999999999999999999999.0.0").unwrap_err();
        assert!(error.to_string().contains("out of range"), "{}", error);
        let error = ServerVersion::parse("12.x.0").unwrap_err();
        assert!(error.to_string().contains("not numeric"), "{}", error);
    }

    #[test]
    fn unit_classify_boundaries() {
        let cases = [
            ((11, 0, 0), false),
            ((11, 0, 1), false),
            ((11, 0, 2), true),
            ((11, 1, 0), true),
            ((10, 99, 99), false),
            ((12, 0, 0), true),
        ];
        for ((major, minor, patch), supported) in cases {
            assert_eq!(ServerVersion::new(major, minor, patch).supports_standard_acl_endpoint(), supported, "{}.{}.{}", major, minor, patch);
        }
    }

    #[test]
    fn unit_classify_by_major() {
        for major in 0..=10 {
            for minor in [0, 1, 5, 99] {
                for patch in [0, 1, 2, 99] {
                    assert!(!ServerVersion::new(major, minor, patch).supports_standard_acl_endpoint());
                }
            }
        }
        for minor in [0, 1, 5, 99] {
            for patch in [0, 1, 2, 99] {
                let supported = !(minor == 0 && patch <= 1);
                assert_eq!(ServerVersion::new(11, minor, patch).supports_standard_acl_endpoint(), supported);
            }
        }
        for major in [12, 13, 14, 100] {
            for minor in [0, 1, 99] {
                for patch in [0, 1, 99] {
                    assert!(ServerVersion::new(major, minor, patch).supports_standard_acl_endpoint());
                }
            }
        }
    }

    #[test]
    fn unit_display() {
        assert_eq!(ServerVersion::new(11, 0, 1).to_string(), "11.0.1");
    }

    #[test]
    fn integration_resolve_reads_version_once() {
        let mut server = mockito::Server::new();
        let version_mock = server.mock("GET", "/version")
            .with_status(200)
            .with_body("Chef Server 12.17.15\n")
            .expect(1)
            .create();

        let resolver = VersionResolver::new(&server.url());
        assert_eq!(resolver.resolve().unwrap(), ServerVersion::new(12, 17, 15));
        assert_eq!(resolver.resolve().unwrap(), ServerVersion::new(12, 17, 15));

        version_mock.assert();
    }

    #[test]
    fn integration_resolve_reads_version_once_concurrently() {
        let mut server = mockito::Server::new();
        let version_mock = server.mock("GET", "/version")
            .with_status(200)
            .with_body("enterprise-chef 11.0.1-1\n")
            .expect(1)
            .create();

        let resolver = Arc::new(VersionResolver::new(&format!("{}/", server.url())));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let resolver = resolver.clone();
                thread::spawn(move || resolver.resolve().unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), ServerVersion::new(11, 0, 1));
        }

        version_mock.assert();
    }

    #[test]
    fn integration_resolve_propagates_errors() {
        let mut server = mockito::Server::new();
        let garbage = server.mock("GET", "/version")
            .with_status(200)
            .with_body("no version here")
            .create();

        let resolver = VersionResolver::new(&server.url());
        assert!(resolver.resolve().is_err());
        garbage.assert();

        let mut server = mockito::Server::new();
        let failure = server.mock("GET", "/version")
            .with_status(500)
            .create();
        let resolver = VersionResolver::new(&server.url());
        assert!(resolver.resolve().is_err());
        failure.assert();
    }
}
