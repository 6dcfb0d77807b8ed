//! Serde model of a single-cluster kubeconfig.
//!
//! Field declaration order is the serialized order, so every struct lists its
//! fields alphabetically by their kebab-case key.

use serde::*;

// region: Cluster
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ClusterSpec {
    /// Base64 of the raw CA bytes.
    pub certificate_authority_data: String,
    pub server: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NamedCluster {
    pub cluster: ClusterSpec,
    pub name: String,
}
// endregion

// region: Context
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ContextSpec {
    pub cluster: String,
    pub user: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NamedContext {
    pub context: ContextSpec,
    pub name: String,
}
// endregion

// region: User
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UserSpec {
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NamedUser {
    pub name: String,
    pub user: UserSpec,
}
// endregion

// region: Common
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    #[serde(rename = "v1")]
    V1,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Config,
}

/// A kubeconfig holding exactly one cluster, one context and one user.
///
/// The one-element arrays make a second entry unrepresentable; decoding a
/// document with more or fewer entries fails.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Kubeconfig {
    #[serde(rename = "apiVersion")]
    pub api_version: ApiVersion,
    pub clusters: [NamedCluster; 1],
    pub contexts: [NamedContext; 1],
    pub current_context: String,
    pub kind: Kind,
    pub users: [NamedUser; 1],
}

impl Kubeconfig {
    pub fn cluster(&self) -> &NamedCluster {
        &self.clusters[0]
    }

    pub fn context(&self) -> &NamedContext {
        &self.contexts[0]
    }

    pub fn user(&self) -> &NamedUser {
        &self.users[0]
    }

    pub fn to_vec(&self) -> Result<Vec<u8>, serde_yaml::Error> {
        serde_yaml::to_string(self).map(String::into_bytes)
    }

    pub fn from_slice(data: &[u8]) -> Result<Kubeconfig, serde_yaml::Error> {
        serde_yaml::from_slice(data)
    }
}
// endregion

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "\
apiVersion: v1
clusters:
- cluster:
    certificate-authority-data: Y2E=
    server: https://10.0.0.1:6443
  name: k0s
contexts:
- context:
    cluster: k0s
    user: kubelet
  name: k0s
current-context: k0s
kind: Config
users:
- name: kubelet
  user:
    token: abcdef.0123456789abcdef
";

    #[test]
    fn decodes_single_entry_document() {
        let kc = Kubeconfig::from_slice(DOC.as_bytes()).unwrap();
        assert_eq!(kc.api_version, ApiVersion::V1);
        assert_eq!(kc.kind, Kind::Config);
        assert_eq!(kc.cluster().cluster.server, "https://10.0.0.1:6443");
        assert_eq!(kc.context().context.user, "kubelet");
        assert_eq!(kc.user().user.token, "abcdef.0123456789abcdef");
    }

    #[test]
    fn encodes_back_to_the_same_text() {
        let kc = Kubeconfig::from_slice(DOC.as_bytes()).unwrap();
        assert_eq!(String::from_utf8(kc.to_vec().unwrap()).unwrap(), DOC);
    }

    #[test]
    fn rejects_multiple_users() {
        let doc = format!("{DOC}- name: other\n  user:\n    token: x.y\n");
        assert!(Kubeconfig::from_slice(doc.as_bytes()).is_err());
    }

    #[test]
    fn rejects_empty_clusters() {
        let doc = DOC.replace(
            "clusters:\n- cluster:\n    certificate-authority-data: Y2E=\n    server: https://10.0.0.1:6443\n  name: k0s\n",
            "clusters: []\n",
        );
        assert!(Kubeconfig::from_slice(doc.as_bytes()).is_err());
    }

    #[test]
    fn rejects_unknown_kind() {
        let doc = DOC.replace("kind: Config", "kind: Secret");
        assert!(Kubeconfig::from_slice(doc.as_bytes()).is_err());
    }
}
