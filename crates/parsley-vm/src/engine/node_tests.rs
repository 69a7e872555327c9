use std::rc::Rc;

use parsley_core::{InputBuffer, InputChar, InputLocation};

use crate::engine::{Node, NodeRef, find_node, find_node_by_label, find_node_by_path, walk};

fn node(
    input: &InputBuffer,
    label: &str,
    span: (usize, usize),
    children: Vec<NodeRef<()>>,
) -> NodeRef<()> {
    Rc::new(Node::new(
        label,
        children,
        InputLocation::at(input, span.0),
        InputLocation::at(input, span.1),
        None,
    ))
}

/// `Sum(Number 0..2, Op 2..3, Number 3..4)`
fn sum(input: &InputBuffer) -> NodeRef<()> {
    let left = node(input, "Number", (0, 2), vec![]);
    let op = node(input, "Op", (2, 3), vec![]);
    let right = node(input, "Number", (3, 4), vec![]);
    node(input, "Sum", (0, 4), vec![left, op, right])
}

#[test]
fn text_and_first_char() {
    let input = InputBuffer::new("12+3");
    let root = sum(&input);
    assert_eq!(root.text(&input), "12+3");
    assert_eq!(root.children()[1].text(&input), "+");
    assert_eq!(root.first_char(&input), InputChar::Char('1'));

    let empty = node(&input, "Empty", (4, 4), vec![]);
    assert_eq!(empty.first_char(&input), InputChar::Eoi);
}

#[test]
fn illegal_nodes() {
    let input = InputBuffer::new("x");
    let start = InputLocation::start(&input);
    let illegal: Node<()> = Node::illegal(start, start.advance(&input));
    assert!(illegal.is_illegal());
    assert_eq!(illegal.label(), "ILLEGAL");
    assert!(illegal.children().is_empty());
    assert!(illegal.value().is_none());
}

#[test]
fn lookup_by_label_prefix_is_depth_first() {
    let input = InputBuffer::new("12+3");
    let roots = [sum(&input)];
    let found = find_node_by_label(&roots, "Num").unwrap();
    assert_eq!(found.text(&input), "12");
    assert!(find_node_by_label(&roots, "Missing").is_none());

    let second = find_node(&roots, &|n: &Node<()>| n.label() == "Number" && n.start().index > 0);
    assert_eq!(second.unwrap().text(&input), "3");
}

#[test]
fn lookup_by_path_walks_one_level_per_segment() {
    let input = InputBuffer::new("12+3");
    let roots = [sum(&input)];
    assert_eq!(find_node_by_path(&roots, "Sum/Op").unwrap().text(&input), "+");
    assert!(find_node_by_path(&roots, "Op").is_none());
    assert!(find_node_by_path(&roots, "Sum/Op/Deeper").is_none());
}

#[test]
fn walk_visits_in_order_with_depth() {
    let input = InputBuffer::new("12+3");
    let root = sum(&input);
    let mut seen = Vec::new();
    walk(&root, &mut |n, depth| seen.push(format!("{depth}:{}", n.label())));
    assert_eq!(seen, ["0:Sum", "1:Number", "1:Op", "1:Number"]);
}
