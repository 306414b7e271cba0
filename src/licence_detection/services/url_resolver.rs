/// UrlResolver service for deriving a dependency's source URL
///
/// Pure string manipulation: no lookups, no network, same input same output.
pub struct UrlResolver;

/// Code forges whose repositories live at `host/org/repo`
const FORGE_HOSTS: &[&str] = &["github.com", "gitlab.com", "bitbucket.org"];

/// Import-path prefixes that mirror repositories hosted under a GitHub organization
const ALIAS_PREFIXES: &[(&str, &str)] = &[
    ("k8s.io/", "github.com/kubernetes/"),
    ("sigs.k8s.io/", "github.com/kubernetes-sigs/"),
    ("golang.org/x/", "github.com/golang/"),
];

const GOPKG_IN: &str = "gopkg.in/";

const SCHEME: &str = "https://";

impl UrlResolver {
    /// Determines the canonical source URL of a module
    ///
    /// # Arguments
    /// * `override_url` - Operator-supplied URL; returned verbatim when non-empty
    /// * `module_path` - The module path, e.g. `github.com/elastic/cloud-on-k8s/api/v1`
    ///
    /// # Returns
    /// An `https://` URL pointing at the repository root
    pub fn determine_url(override_url: Option<&str>, module_path: &str) -> String {
        if let Some(url) = override_url.filter(|u| !u.is_empty()) {
            return url.to_string();
        }

        Self::forge_url(module_path)
            .or_else(|| Self::alias_url(module_path))
            .or_else(|| Self::gopkg_url(module_path))
            .unwrap_or_else(|| format!("{}{}", SCHEME, module_path))
    }

    /// Collapses `host/org/repo/sub/path` to `https://host/org/repo`
    fn forge_url(module_path: &str) -> Option<String> {
        let segments: Vec<&str> = module_path.split('/').collect();
        if segments.len() > 3 && FORGE_HOSTS.contains(&segments[0]) {
            return Some(format!("{}{}", SCHEME, segments[..3].join("/")));
        }
        None
    }

    /// Rewrites `k8s.io/apimachinery/pkg` to `https://github.com/kubernetes/apimachinery`
    fn alias_url(module_path: &str) -> Option<String> {
        ALIAS_PREFIXES.iter().find_map(|(prefix, upstream)| {
            let repo = module_path.strip_prefix(prefix)?.split('/').next()?;
            (!repo.is_empty()).then(|| format!("{}{}{}", SCHEME, upstream, repo))
        })
    }

    /// Resolves gopkg.in's two naming schemes
    ///
    /// `gopkg.in/pkg.v3` lives at `github.com/go-pkg/pkg` and
    /// `gopkg.in/user/pkg.v3` at `github.com/user/pkg`.
    fn gopkg_url(module_path: &str) -> Option<String> {
        let rest = module_path.strip_prefix(GOPKG_IN)?;
        let segments: Vec<&str> = rest.split('/').collect();

        let strip_version = |segment: &str| -> Option<String> {
            let (name, version) = segment.rsplit_once(".v")?;
            let is_version = !version.is_empty() && version.chars().all(|c| c.is_ascii_digit());
            (is_version && !name.is_empty()).then(|| name.to_string())
        };

        if let Some(pkg) = segments.first().and_then(|s| strip_version(*s)) {
            return Some(format!("{}github.com/go-{}/{}", SCHEME, pkg, pkg));
        }

        match segments.as_slice() {
            [user, pkg, ..] => {
                let pkg = strip_version(*pkg)?;
                Some(format!("{}github.com/{}/{}", SCHEME, user, pkg))
            }
            _ => None,
        }
    }
}
