//! The reference topology: a campus LMS deployment on AWS.
//!
//! Deployment region is Asia Pacific (Sydney), `ap-southeast-2`. Two
//! availability zones each hold a public and a private subnet. Zone a runs
//! the active LMS and faculty servers with the primary database; zone b
//! holds standbys and a synchronous replica.
//!
//! Both zones send outbound traffic through the single NAT gateway in zone
//! a. Zone b's public subnet is left empty, reserved for load balancer
//! redundancy.

use stratus::{
    BuildError,
    builder::DiagramBuilder,
    config::{AppConfig, Direction, GraphConfig, LabelLocation, OutputConfig, StyleConfig},
    identifier::Id,
    semantic::{Category, Diagram, EdgeOptions},
};

pub const TITLE: &str = "Yoobee College AWS Architecture";

/// Workloads in one private subnet.
#[derive(Debug, Clone, Copy)]
struct PrivateSubnet {
    lms: Id,
    faculty: Id,
    database: Id,
}

/// Layout settings the reference diagram is drawn with when no
/// configuration file is present.
pub fn default_config() -> AppConfig {
    let graph = GraphConfig::default()
        .with_direction(Direction::TopBottom)
        .with_node_spacing(0.8)
        .with_rank_spacing(1.5)
        .with_font_size(12.0)
        .with_label_location(LabelLocation::Bottom);
    AppConfig::new(graph, OutputConfig::default(), StyleConfig::default())
}

/// Declare the reference topology.
///
/// # Errors
///
/// Only fails if the declaration itself is inconsistent, which the tests
/// below rule out.
pub fn campus_network() -> Result<Diagram, BuildError> {
    let mut builder = DiagramBuilder::new(TITLE);

    let internet_user = builder.named_node(
        "internet_user",
        "Student/Faculty\nInternet User",
        Category::Actor,
    )?;
    let it_admin = builder.named_node(
        "it_admin",
        "IT Admin\n(SSM Session Manager)",
        Category::Actor,
    )?;

    builder.group("AWS Region", |region| {
        let s3 = region.named_node("s3", "S3 Bucket\nCourse Data", Category::Storage)?;

        region.group("VPC: 10.0.0.0/16", |vpc| {
            let igw = vpc.named_node("igw", "Internet Gateway", Category::Network)?;
            let alb = vpc.named_node(
                "alb",
                "Application Load Balancer\n(SG: ALB-SG)",
                Category::Network,
            )?;
            let endpoint = vpc.named_node(
                "vpc_endpoint",
                "VPC Gateway Endpoint\nfor S3",
                Category::Network,
            )?;

            let (nat_a, zone_a) = vpc.group("Availability Zone ap-southeast-2a", |az| {
                let nat = az.group("Public Subnet A\n10.0.1.0/24\nNACL: Public-NACL", |public| {
                    public.named_node("nat_a", "NAT Gateway A", Category::Network)
                })?;
                let workloads = az.group(
                    "Private Subnet A\n10.0.2.0/24\nNACL: Private-NACL",
                    |private| {
                        Ok(PrivateSubnet {
                            lms: private.named_node(
                                "ec2_lms_a",
                                "LMS Server A\nLinux EC2\n(SG: LMS-SG)",
                                Category::Compute,
                            )?,
                            faculty: private.named_node(
                                "ec2_faculty_a",
                                "Faculty App A\nWindows EC2\n(SG: Faculty-SG)",
                                Category::Compute,
                            )?,
                            database: private.named_node(
                                "rds_master",
                                "RDS Master\nPostgreSQL\n(SG: RDS-SG)",
                                Category::Database,
                            )?,
                        })
                    },
                )?;
                Ok((nat, workloads))
            })?;

            let zone_b = vpc.group("Availability Zone ap-southeast-2b", |az| {
                az.group("Public Subnet B\n10.0.3.0/24\nNACL: Public-NACL", |_| Ok(()))?;
                az.group(
                    "Private Subnet B\n10.0.4.0/24\nNACL: Private-NACL",
                    |private| {
                        Ok(PrivateSubnet {
                            lms: private.named_node(
                                "ec2_lms_b",
                                "LMS Server B\nStandby\n(SG: LMS-SG)",
                                Category::Compute,
                            )?,
                            faculty: private.named_node(
                                "ec2_faculty_b",
                                "Faculty App B\nStandby\n(SG: Faculty-SG)",
                                Category::Compute,
                            )?,
                            database: private.named_node(
                                "rds_standby",
                                "RDS Standby\nReplica\nPostgreSQL\n(SG: RDS-SG)",
                                Category::Database,
                            )?,
                        })
                    },
                )
            })?;

            // User traffic
            vpc.chain(&[internet_user, igw, alb], EdgeOptions::new())?;
            vpc.fan_out(alb, &[zone_a.lms, zone_b.lms], EdgeOptions::new())?;
            vpc.fan_out(alb, &[zone_a.faculty, zone_b.faculty], EdgeOptions::new())?;

            // Admin access goes through SSM, not a network path.
            vpc.fan_out(
                it_admin,
                &[zone_a.lms, zone_a.faculty, zone_a.database],
                EdgeOptions::labeled("SSM Session Manager"),
            )?;

            let instances = [zone_a.lms, zone_a.faculty, zone_b.lms, zone_b.faculty];
            vpc.fan_in(&instances, zone_a.database, EdgeOptions::new())?;

            vpc.fan_in(
                &instances,
                endpoint,
                EdgeOptions::labeled("IAM Role via Route Table"),
            )?;
            vpc.connect_with(endpoint, s3, EdgeOptions::labeled("Private Link"))?;

            let os_updates = EdgeOptions::labeled("OS Updates");
            vpc.fan_in(&[zone_a.lms, zone_a.faculty], nat_a, os_updates.clone())?;
            vpc.connect(nat_a, igw)?;
            // Zone b has no NAT gateway of its own.
            vpc.fan_in(&[zone_b.lms, zone_b.faculty], nat_a, os_updates)?;

            vpc.connect_with(
                zone_a.database,
                zone_b.database,
                EdgeOptions::labeled("Sync Replication"),
            )
        })
    })?;

    Ok(builder.build())
}
