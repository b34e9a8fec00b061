//! Reusable definition file content

pub const GMAIL_TOPICS: &str = r#"
defaults:
  replication: 3
topics:
  - name: "{stack}.gmail.messages"
    partitions: 4
  - name: "{stack}.gmail.threads"
"#;

pub const SLACK_TOPICS: &str = r#"
topics:
  - name: "{stack}.slack.events"
"#;

pub const DATA_PLANE_TOPICS: &str = r#"
shared_topics:
  - name: "{stack}-enrichment"
transport_node_topics:
  template: "{stack}-{transport}-{node}"
  transports: [http, grpc]
  nodes: [n1, n2]
"#;

pub const DNS_RECORDS: &str = r#"
records:
  - name: "1"
    domain: "api.{stack}.example.io"
    ips: [203.0.113.10, 203.0.113.11]
"#;

/// Layout of a complete project, relative to its root.
pub const FULL_PROJECT: &[(&str, &str)] = &[
    ("integrations/gmail/kafka-topics.yaml", GMAIL_TOPICS),
    ("integrations/slack/kafka-topics.yaml", SLACK_TOPICS),
    ("data-plane/kafka-topics.yaml", DATA_PLANE_TOPICS),
    ("dns-records.yaml", DNS_RECORDS),
];
