use tree_regexp::*;

#[test]
fn exposes_group_source() {
    let tr = TreeRegexp::new(r"(a(?:b)?)(c)").unwrap();
    let sources: Vec<_> = tr
        .group_builder()
        .children()
        .iter()
        .map(|gb| gb.source())
        .collect();
    assert_eq!(sources, ["a(?:b)?", "c"]);
}

#[test]
fn builds_tree() {
    let tr = TreeRegexp::new(r"(a(?:b)?)(c)").unwrap();
    let group = tr.match_str("ac").unwrap();
    assert_eq!(group.value(), Some("ac"));
    assert_eq!(group.children()[0].value(), Some("a"));
    assert!(group.children()[0].children().is_empty());
    assert_eq!(group.children()[1].value(), Some("c"));
}

#[test]
fn ignores_non_capturing_groups() {
    let tr = TreeRegexp::new(r"(a(?:b)?)(c)").unwrap();
    let group = tr.match_str("abc").unwrap();
    assert_eq!(group.value(), Some("abc"));
    assert_eq!(group.num_children(), 2);
    assert_eq!(group.children()[0].value(), Some("ab"));
    assert!(group.children()[0].children().is_empty());
    assert_eq!(group.children()[1].value(), Some("c"));
}

#[test]
fn matches_optional_group() {
    let tr = TreeRegexp::new(r"^Something( with an optional argument)?").unwrap();
    let group = tr.match_str("Something").unwrap();
    assert_eq!(group.num_children(), 1);
    assert_eq!(group.children()[0].value(), None);
    assert_eq!(group.children()[0].start(), None);
    assert_eq!(group.children()[0].end(), None);

    let group = tr.match_str("Something with an optional argument").unwrap();
    assert_eq!(
        group.children()[0].value(),
        Some(" with an optional argument")
    );
}

#[test]
fn matches_nested_groups() {
    let tr = TreeRegexp::new(
        r"^A (\d+) thick line from ((\d+),\s*(\d+),\s*(\d+)) to ((\d+),\s*(\d+),\s*(\d+))",
    )
    .unwrap();
    let group = tr
        .match_str("A 5 thick line from 10,20,30 to 40,50,60")
        .unwrap();

    assert_eq!(group.children()[0].value(), Some("5"));
    assert_eq!(group.children()[1].value(), Some("10,20,30"));
    assert_eq!(group.children()[1].children()[0].value(), Some("10"));
    assert_eq!(group.children()[1].children()[1].value(), Some("20"));
    assert_eq!(group.children()[1].children()[2].value(), Some("30"));
    assert_eq!(group.children()[2].value(), Some("40,50,60"));
    assert_eq!(group.children()[2].children()[0].value(), Some("40"));
    assert_eq!(group.children()[2].children()[1].value(), Some("50"));
    assert_eq!(group.children()[2].children()[2].value(), Some("60"));
}

#[test]
fn detects_multiple_non_capturing_groups() {
    let tr = TreeRegexp::new(r"(?:a)(:b)(\?c)(d)").unwrap();
    let group = tr.match_str("a:b?cd").unwrap();
    assert_eq!(group.num_children(), 3);
}

#[test]
fn works_with_escaped_backslash() {
    let tr = TreeRegexp::new(r"foo\\(bar|baz)").unwrap();
    let group = tr.match_str(r"foo\bar").unwrap();
    assert_eq!(group.num_children(), 1);
    assert_eq!(group.children()[0].value(), Some("bar"));
}

#[test]
fn works_with_escaped_slash() {
    let tr = TreeRegexp::new(r"^I go to '\/(.+)'$").unwrap();
    let group = tr.match_str("I go to '/hello'").unwrap();
    assert_eq!(group.num_children(), 1);
    assert_eq!(group.children()[0].value(), Some("hello"));
}

#[test]
fn works_with_digit_and_word() {
    let tr = TreeRegexp::new(r"^(\d) (\w+)$").unwrap();
    let group = tr.match_str("2 you").unwrap();
    assert_eq!(group.num_children(), 2);
}

#[test]
fn captures_non_capturing_groups_with_capturing_groups_inside() {
    let tr = TreeRegexp::new(r#"the stdout(?: from "(.*?)")?"#).unwrap();
    let group = tr.match_str("the stdout").unwrap();
    assert_eq!(group.value(), Some("the stdout"));
    assert_eq!(group.children()[0].value(), None);
    assert_eq!(group.num_children(), 1);

    let group = tr.match_str(r#"the stdout from "ls""#).unwrap();
    assert_eq!(group.children()[0].value(), Some("ls"));
}

#[test]
fn works_with_flags() {
    let tr = TreeRegexp::builder("HELLO")
        .case_insensitive(true)
        .build()
        .unwrap();
    let group = tr.match_str("hello").unwrap();
    assert_eq!(group.value(), Some("hello"));

    let tr = TreeRegexp::new("HELLO").unwrap();
    assert!(tr.match_str("hello").is_none());
}

#[test]
fn does_not_consider_parenthesis_in_character_class_as_group() {
    let tr = TreeRegexp::new(r"^drawings: ([A-Z, ()]+)$").unwrap();
    let group = tr.match_str("drawings: ONE(TWO)").unwrap();
    assert_eq!(group.value(), Some("drawings: ONE(TWO)"));
    assert_eq!(group.num_children(), 1);
    assert_eq!(group.children()[0].value(), Some("ONE(TWO)"));
}

#[test]
fn empty_match_is_not_absent() {
    let tr = TreeRegexp::new(r"^a(b*)(c)?$").unwrap();
    let group = tr.match_str("a").unwrap();
    assert_eq!(group.children()[0].value(), Some(""));
    assert_eq!(group.children()[0].start(), Some(1));
    assert_eq!(group.children()[1].value(), None);
}

#[test]
fn alternation_keeps_shape() {
    let tr = TreeRegexp::new(r"^(?:(\d+)(px)|((\w+)(%)))$").unwrap();

    let group = tr.match_str("12px").unwrap();
    assert_eq!(group.values(), [Some("12"), Some("px"), None]);
    assert_eq!(group.children()[2].values(), [None, None]);

    let group = tr.match_str("half%").unwrap();
    assert_eq!(group.values(), [None, None, Some("half%")]);
    assert_eq!(group.children()[2].values(), [Some("half"), Some("%")]);
}

#[test]
fn named_groups() {
    let tr = TreeRegexp::new(r"^(?P<key>\w+)=(?<value>(\d+)|\w+)$").unwrap();
    let names: Vec<_> = tr.group_builder().iter().map(|g| g.name()).collect();
    assert_eq!(names, [Some("key"), Some("value"), None]);

    let group = tr.match_str("size=10").unwrap();
    assert_eq!(group.values(), [Some("size"), Some("10")]);
    assert_eq!(group.children()[1].children()[0].value(), Some("10"));
}

#[test]
fn repeated_matches_are_equal() {
    let tr = TreeRegexp::new(r"((\d+)\.(\d+)?)x?").unwrap();
    let first = tr.match_str("v1.2").unwrap();
    for _ in 0..5 {
        assert_eq!(tr.match_str("v1.2").unwrap(), first);
    }
    assert_eq!(first.start(), Some(1));
    assert_eq!(first.to_string(), "1.2");
}

#[test]
fn matches_across_threads() {
    let tr = std::sync::Arc::new(TreeRegexp::new(r"^(\d+)-(\d+)$").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let tr = tr.clone();
            std::thread::spawn(move || {
                let input = format!("{}-{}", i, i * 10);
                let group = tr.match_str(&input).unwrap();
                let values: Vec<Option<String>> = group
                    .values()
                    .into_iter()
                    .map(|v| v.map(String::from))
                    .collect();
                values
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let values = handle.join().unwrap();
        assert_eq!(
            values,
            [Some(i.to_string()), Some((i * 10).to_string())]
        );
    }
}

#[test]
fn static_pattern() {
    let group = tree_regexp!(r"^(\w+) (?:is|are) ((\d+) years?) old$")
        .match_str("Bob is 7 years old")
        .unwrap();
    assert_eq!(group.values(), [Some("Bob"), Some("7 years")]);
    assert_eq!(group.children()[1].values(), [Some("7")]);

    fn same_instance() -> &'static TreeRegexp {
        tree_regexp!("(a)")
    }
    assert!(std::ptr::eq(same_instance(), same_instance()));
}

#[test]
fn verbose_mode() {
    let pattern = "(?x)
        (\\d+)   # first number (with a comment)
        \\s* , \\s*
        (\\d+)   # second number )
    ";
    let group = TreeRegexp::new(pattern).unwrap().match_str("3 , 4").unwrap();
    assert_eq!(group.values(), [Some("3"), Some("4")]);

    let group = tree_regexp!("(?x)(a) # comment )").match_str("a").unwrap();
    assert_eq!(group.values(), [Some("a")]);
    assert_eq!(group.children()[0].span(), Some(0..1));
}
