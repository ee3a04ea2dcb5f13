//! Built-in navigation forest for a CSD7-class drive.

use crate::builder::TreeBuilder;
use crate::error::TreeResult;
use crate::forest::DriveForest;

pub const ONLINE_ROOT: &str = "On Line Drives";
pub const OFFLINE_ROOT: &str = "Off Line : Unsaved";

const DRIVE_NODES_BEFORE_TUNING: &[&str] = &["Mode Configuration", "Motor"];
const TUNING_NODES: &[&str] = &[
    "Tuningless",
    "Resonant Suppression",
    "Vibration Suppression",
    "Encoders",
];
const DRIVE_NODES_AFTER_TUNING: &[&str] = &[
    "Digital Inputs",
    "Digital Outputs",
    "Analog Outputs",
    "ECAT Homing",
    "Monitor",
    "Oscilloscope",
    "Faults",
    "Fully Closed System",
    "ServiceInfo",
    "Control Panel",
];
const OFFLINE_GROUPS: &[&str] = &[
    "Group 0 : Basic",
    "Group 1 : Gain",
    "Group 2 : Velocity",
    "Group 3 : Position",
    "Group 4 : Current",
    "Group 5 : Auxiliary",
];

/// Two roots: the connected drive and the offline unsaved parameter groups.
pub fn drive_forest() -> TreeResult<DriveForest> {
    let mut builder = TreeBuilder::new();

    let online = builder.add_root(ONLINE_ROOT);
    builder.set_expanded(online, true);
    let drive = builder.add_child(online, "Drive");
    builder.set_expanded(drive, true);

    for name in DRIVE_NODES_BEFORE_TUNING {
        builder.add_child(drive, *name);
    }
    let tuning = builder.add_child(drive, "PID Tuning");
    builder.set_expanded(tuning, true);
    for name in TUNING_NODES {
        builder.add_child(tuning, *name);
    }
    for name in DRIVE_NODES_AFTER_TUNING {
        builder.add_child(drive, *name);
    }

    let offline = builder.add_root(OFFLINE_ROOT);
    builder.set_expanded(offline, true);
    let group = builder.add_child(offline, "Group");
    builder.set_expanded(group, true);
    for name in OFFLINE_GROUPS {
        builder.add_child(group, *name);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_expanded_roots() {
        let forest = drive_forest().unwrap();
        let roots: Vec<_> = forest.roots().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(roots, vec![ONLINE_ROOT, OFFLINE_ROOT]);
        assert!(forest.roots().iter().all(|r| r.expanded));
    }

    #[test]
    fn node_count() {
        let forest = drive_forest().unwrap();
        // roots, Drive, Group, PID Tuning, then 2 + 4 + 10 drive nodes and 6 groups
        assert_eq!(forest.len(), 27);
    }
}
