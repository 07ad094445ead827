fn main() {
    tree_regexp::tree_regexp!();
    tree_regexp::tree_regexp!("(a)", "b");
}
