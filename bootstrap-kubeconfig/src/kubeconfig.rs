use base64::{engine::general_purpose, Engine as _};
use tracing::debug;

use crate::direct::{
    ApiVersion, ClusterSpec, ContextSpec, Kind, Kubeconfig, NamedCluster, NamedContext, NamedUser,
    UserSpec,
};
use crate::error::Error;
use crate::token::BootstrapToken;

/// Name shared by the cluster, the context and `current-context`.
pub const CLUSTER_NAME: &str = "k0s";

impl Kubeconfig {
    /// Builds the document granting `user_name` access to the cluster at
    /// `join_url` with a bearer token.
    pub fn bootstrap(
        join_url: &str,
        ca_cert: &[u8],
        user_name: &str,
        token: &impl BootstrapToken,
    ) -> Result<Kubeconfig, Error> {
        let token = token.canonical_string()?;

        Ok(Kubeconfig {
            api_version: ApiVersion::V1,
            clusters: [NamedCluster {
                cluster: ClusterSpec {
                    certificate_authority_data: general_purpose::STANDARD.encode(ca_cert),
                    server: join_url.to_owned(),
                },
                name: CLUSTER_NAME.to_owned(),
            }],
            contexts: [NamedContext {
                context: ContextSpec {
                    cluster: CLUSTER_NAME.to_owned(),
                    user: user_name.to_owned(),
                },
                name: CLUSTER_NAME.to_owned(),
            }],
            current_context: CLUSTER_NAME.to_owned(),
            kind: Kind::Config,
            users: [NamedUser {
                name: user_name.to_owned(),
                user: UserSpec { token },
            }],
        })
    }
}

/// Renders a kubeconfig YAML document for a bootstrap token.
///
/// The output is deterministic and ends with a single newline. Fails only if
/// the token cannot produce its canonical string or YAML encoding fails.
pub fn generate_kubeconfig(
    join_url: &str,
    ca_cert: &[u8],
    user_name: &str,
    token: &impl BootstrapToken,
) -> Result<Vec<u8>, Error> {
    let kc = Kubeconfig::bootstrap(join_url, ca_cert, user_name, token)?;
    let data = kc.to_vec()?;

    debug!(
        server = join_url,
        user = user_name,
        ca_bytes = ca_cert.len(),
        len = data.len(),
        "generated bootstrap kubeconfig"
    );

    Ok(data)
}
