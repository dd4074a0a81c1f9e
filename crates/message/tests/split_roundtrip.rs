use moviequeue_message::{escape_markdown, MessageSplitter, SplitConfig, TELEGRAM_MESSAGE_LIMIT};

fn queue_listing(count: usize) -> String {
    (0..count)
        .map(|idx| escape_markdown(&format!("Movie number {idx} (19{:02})", idx % 100)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn long_listing_round_trips_and_respects_limit() {
    let text = queue_listing(600);
    let fragments = MessageSplitter::default().split(&text);

    assert!(fragments.len() > 1, "expected the listing to be split");
    for fragment in &fragments {
        assert!(
            fragment.chars().count() <= TELEGRAM_MESSAGE_LIMIT,
            "fragment exceeds limit: {}",
            fragment.chars().count()
        );
    }
    assert_eq!(fragments.join("\n"), text);
}

#[test]
fn no_line_is_dropped_or_duplicated() {
    let text = queue_listing(300);
    let splitter = MessageSplitter::new(SplitConfig {
        max_fragment_len: 200,
        ..SplitConfig::default()
    });

    let original: Vec<&str> = text.split('\n').collect();
    let fragments = splitter.split(&text);
    let rebuilt: Vec<&str> = fragments.iter().flat_map(|f| f.split('\n')).collect();

    assert_eq!(rebuilt, original);
}

#[test]
fn custom_separators_are_honoured() {
    let splitter = MessageSplitter::new(SplitConfig {
        max_fragment_len: 10,
        line_separator: "\n\n".to_string(),
        join_separator: "\n\n".to_string(),
    });

    let text = "Netflix\n\nPrime\n\nDisney+";
    let fragments = splitter.split(text);

    assert_eq!(fragments.join("\n\n"), text);
    assert!(fragments.iter().all(|f| f.chars().count() <= 10));
}

#[test]
fn oversized_single_line_stays_whole() {
    let line = "x".repeat(TELEGRAM_MESSAGE_LIMIT + 10);
    let text = format!("head\n{line}\ntail");

    let fragments = MessageSplitter::default().split(&text);

    assert_eq!(fragments.len(), 3);
    assert_eq!(fragments[1], line);
    assert_eq!(fragments.join("\n"), text);
}
