fn main() {
    tree_regexp::tree_regexp!(r"^(\d+-(\d+)$");
    tree_regexp::tree_regexp!(r"[[a](]");
    tree_regexp::tree_regexp!(r"[a[b]()]");
}
