//! Cloud and scheduler architecture tables.
//!
//! Both axes are closed enumerations. Each value has a canonical name used in
//! Mufiles, on the command line, and when synthesizing anonymous targets.
//! An unset axis is represented by `None` and has the empty name.

use std::{fmt, str::FromStr};

/// Supported cloud providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cloud {
    /// Amazon Web Services
    Aws,
    /// Google Cloud Platform
    Gcp,
    /// Microsoft Azure
    Azure,
    /// VMware vSphere
    VMware,
}

impl Cloud {
    /// Every recognized cloud, in table order.
    pub const ALL: [Cloud; 4] = [Cloud::Aws, Cloud::Gcp, Cloud::Azure, Cloud::VMware];

    /// Returns the canonical name of this cloud.
    pub fn name(&self) -> &'static str {
        match self {
            Cloud::Aws => "aws",
            Cloud::Gcp => "gcp",
            Cloud::Azure => "azure",
            Cloud::VMware => "vmware",
        }
    }

    /// Looks up a cloud by its canonical name (exact match).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Cloud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Cloud {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            format!(
                "unrecognized cloud '{}', expected one of: {}",
                s,
                expected(Self::ALL.iter().map(Cloud::name))
            )
        })
    }
}

/// Supported cluster schedulers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheduler {
    /// Docker Swarm
    Swarm,
    /// Kubernetes
    Kubernetes,
    /// Apache Mesos
    Mesos,
    /// AWS Elastic Container Service
    AwsEcs,
    /// GCP Google Kubernetes Engine
    GcpGke,
    /// Azure Container Service
    AzureAcs,
}

impl Scheduler {
    /// Every recognized scheduler, in table order.
    pub const ALL: [Scheduler; 6] = [
        Scheduler::Swarm,
        Scheduler::Kubernetes,
        Scheduler::Mesos,
        Scheduler::AwsEcs,
        Scheduler::GcpGke,
        Scheduler::AzureAcs,
    ];

    /// Returns the canonical name of this scheduler.
    pub fn name(&self) -> &'static str {
        match self {
            Scheduler::Swarm => "swarm",
            Scheduler::Kubernetes => "kubernetes",
            Scheduler::Mesos => "mesos",
            Scheduler::AwsEcs => "awsecs",
            Scheduler::GcpGke => "gcpgke",
            Scheduler::AzureAcs => "azureacs",
        }
    }

    /// Looks up a scheduler by its canonical name (exact match).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Scheduler {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            format!(
                "unrecognized scheduler '{}', expected one of: {}",
                s,
                expected(Self::ALL.iter().map(Scheduler::name))
            )
        })
    }
}

fn expected<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

/// A (cloud, scheduler) pair describing what a build compiles for.
///
/// Either axis may be unset. Formats as `cloud[:scheduler]`, with `*` standing
/// in for an unset cloud.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Arch {
    pub cloud: Option<Cloud>,
    pub scheduler: Option<Scheduler>,
}

impl Arch {
    /// An architecture with both axes unset.
    pub const NONE: Arch = Arch {
        cloud: None,
        scheduler: None,
    };

    pub fn new(cloud: Option<Cloud>, scheduler: Option<Scheduler>) -> Self {
        Self { cloud, scheduler }
    }

    /// An architecture targeting `cloud` with no scheduler.
    pub fn for_cloud(cloud: Cloud) -> Self {
        Self {
            cloud: Some(cloud),
            scheduler: None,
        }
    }

    /// Returns the same cloud with the given scheduler.
    pub fn with_scheduler(mut self, scheduler: Scheduler) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Canonical cloud name, or `""` when unset.
    pub fn cloud_name(&self) -> &'static str {
        self.cloud.map_or("", |c| c.name())
    }

    /// Canonical scheduler name, or `""` when unset.
    pub fn scheduler_name(&self) -> &'static str {
        self.scheduler.map_or("", |s| s.name())
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cloud {
            Some(cloud) => write!(f, "{}", cloud)?,
            None => write!(f, "*")?,
        }
        if let Some(scheduler) = self.scheduler {
            write!(f, ":{}", scheduler)?;
        }
        Ok(())
    }
}

impl FromStr for Arch {
    type Err = String;

    /// Parses `cloud[:scheduler]`. An empty or `*` cloud leaves that axis unset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (cloud, scheduler) = match s.split_once(':') {
            Some((cloud, scheduler)) => (cloud, Some(scheduler)),
            None => (s, None),
        };

        let cloud = match cloud {
            "" | "*" => None,
            name => Some(name.parse::<Cloud>()?),
        };
        let scheduler = match scheduler {
            None | Some("") => None,
            Some(name) => Some(name.parse::<Scheduler>()?),
        };

        Ok(Self { cloud, scheduler })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_tables_round_trip() {
        for cloud in Cloud::ALL {
            assert_eq!(Cloud::from_name(cloud.name()), Some(cloud));
        }
        for scheduler in Scheduler::ALL {
            assert_eq!(Scheduler::from_name(scheduler.name()), Some(scheduler));
        }
    }

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(Cloud::from_name("AWS"), None);
        assert_eq!(Cloud::from_name(""), None);
        assert_eq!(Scheduler::from_name("k8s"), None);
    }

    #[test]
    fn test_from_str_error_lists_names() {
        let err = Cloud::from_str("bogus").unwrap_err();
        assert_eq!(
            err,
            "unrecognized cloud 'bogus', expected one of: aws, gcp, azure, vmware"
        );
        assert!(Scheduler::from_str("nomad").is_err());
    }

    #[test]
    fn test_arch_parse() {
        assert_eq!(Arch::from_str("aws").unwrap(), Arch::for_cloud(Cloud::Aws));
        assert_eq!(
            Arch::from_str("aws:awsecs").unwrap(),
            Arch::for_cloud(Cloud::Aws).with_scheduler(Scheduler::AwsEcs)
        );
        assert_eq!(
            Arch::from_str("*:kubernetes").unwrap(),
            Arch::new(None, Some(Scheduler::Kubernetes))
        );
        assert_eq!(Arch::from_str("").unwrap(), Arch::NONE);
        assert!(Arch::from_str("aws:bogus").is_err());
    }

    #[test]
    fn test_arch_display() {
        assert_eq!(Arch::for_cloud(Cloud::Gcp).to_string(), "gcp");
        assert_eq!(
            Arch::for_cloud(Cloud::Azure)
                .with_scheduler(Scheduler::AzureAcs)
                .to_string(),
            "azure:azureacs"
        );
        assert_eq!(Arch::new(None, Some(Scheduler::Swarm)).to_string(), "*:swarm");
        assert_eq!(Arch::NONE.to_string(), "*");
    }

    #[test]
    fn test_axis_names() {
        let arch = Arch::for_cloud(Cloud::Aws);
        assert_eq!(arch.cloud_name(), "aws");
        assert_eq!(arch.scheduler_name(), "");
    }
}
