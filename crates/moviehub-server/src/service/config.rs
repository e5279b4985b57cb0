#[cfg(feature = "config")]
use clap::{Args, ValueEnum};
use moviehub_store::StoreConfig;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Which of the two services a process runs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, Display, EnumString, IntoStaticStr)]
#[cfg_attr(feature = "config", derive(ValueEnum))]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ServiceKind {
    /// Movie metadata under `/v1/movieinfos`.
    #[default]
    MovieInfo,
    /// Movie reviews under `/v1/reviews`.
    MovieReview,
}

/// App [`state`] configuration.
///
/// [`state`]: crate::service::ServiceState
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct ServiceConfig {
    /// Service to run.
    #[cfg_attr(
        feature = "config",
        arg(long = "service", env = "SERVICE", value_enum, default_value_t = ServiceKind::MovieInfo)
    )]
    pub service: ServiceKind,

    /// Document store configuration.
    #[cfg_attr(feature = "config", command(flatten))]
    pub store: StoreConfig,
}

impl ServiceConfig {
    /// Sets the service to run.
    pub fn with_service(mut self, service: ServiceKind) -> Self {
        self.service = service;
        self
    }

    /// Sets the document store configuration.
    pub fn with_store(mut self, store: StoreConfig) -> Self {
        self.store = store;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_kind_names() {
        assert_eq!(ServiceKind::MovieInfo.to_string(), "movie-info");
        assert_eq!(
            "movie-review".parse::<ServiceKind>().ok(),
            Some(ServiceKind::MovieReview)
        );
        assert!("movie".parse::<ServiceKind>().is_err());
    }

    #[test]
    fn service_kind_serializes_kebab_case() -> anyhow::Result<()> {
        let json = serde_json::to_string(&ServiceKind::MovieReview)?;
        assert_eq!(json, r#""movie-review""#);
        Ok(())
    }

    #[test]
    fn builder_methods() {
        let config = ServiceConfig::default()
            .with_service(ServiceKind::MovieReview)
            .with_store(StoreConfig::default().with_max_documents(10));

        assert_eq!(config.service, ServiceKind::MovieReview);
        assert_eq!(config.store.max_documents(), 10);
    }
}
