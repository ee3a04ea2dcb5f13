//! Integration tests for sw-tree.

use sw_tree::{TreeBuilder, TreeError, drive_forest};

#[test]
fn walk_is_preorder_with_depth() {
    let mut builder = TreeBuilder::new();
    let r1 = builder.add_root("R1");
    let a = builder.add_child(r1, "A");
    builder.add_child(a, "A1");
    builder.add_child(r1, "B");
    builder.add_root("R2");
    let forest = builder.build().unwrap();

    let order: Vec<_> = forest
        .walk()
        .into_iter()
        .map(|(depth, node)| (depth, node.name.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![(0, "R1"), (1, "A"), (2, "A1"), (1, "B"), (0, "R2")]
    );
    assert_eq!(forest.leaf_names(), vec!["A1", "B", "R2"]);
}

#[test]
fn names_must_be_unique_across_roots() {
    let mut builder = TreeBuilder::new();
    let r1 = builder.add_root("Online");
    let r2 = builder.add_root("Offline");
    builder.add_child(r1, "Motor");
    builder.add_child(r2, "Motor");
    assert!(matches!(
        builder.build(),
        Err(TreeError::DuplicateName { name }) if name == "Motor"
    ));
}

#[test]
fn drive_forest_layout() {
    let forest = drive_forest().unwrap();

    let drive = forest.find("Drive").expect("Drive node");
    assert_eq!(drive.children.len(), 13);
    assert_eq!(drive.children[0].name, "Mode Configuration");
    assert_eq!(drive.children[2].name, "PID Tuning");
    assert_eq!(drive.children[12].name, "Control Panel");

    let tuning = forest.find("PID Tuning").unwrap();
    assert!(tuning.expanded);
    assert_eq!(tuning.children.len(), 4);

    let group = forest.find("Group").unwrap();
    assert_eq!(group.children[5].name, "Group 5 : Auxiliary");

    assert!(forest.contains("ECAT Homing"));
    assert!(!forest.contains("Nonexistent"));
}

#[test]
fn unbound_leaves_uses_predicate() {
    let forest = drive_forest().unwrap();
    let known = ["Motor", "Faults"];
    let unbound = forest.unbound_leaves(|name| known.contains(&name));
    assert!(!unbound.contains(&"Motor"));
    assert!(unbound.contains(&"ECAT Homing"));
    // PID Tuning has children, so it is never reported as a leaf
    assert!(!unbound.contains(&"PID Tuning"));
}
