use lazy_token_core::{count, tokenize, tokens};
use pretty_assertions::assert_eq;

#[test]
fn isolated_newline_sits_between_its_neighbours() {
    assert_eq!(tokenize("a\nb"), vec!["a", "\n", "b"]);
}

#[test]
fn newline_in_a_wider_whitespace_run_is_not_isolated() {
    let tokens = tokenize("a \n b");
    assert_eq!(tokens, vec!["a", "b"]);
    assert!(!tokens.contains(&"\n"));
}

#[test]
fn ten_letters_become_two_chunks() {
    assert_eq!(tokenize("abcdefghij"), vec!["abcdefg", "hij"]);
}

#[test]
fn punctuation_and_words_of_a_greeting() {
    assert_eq!(tokenize("Hello, world!"), vec!["Hello", ",", "world", "!"]);
    assert_eq!(count("Hello, world!"), 4);
}

#[test]
fn short_words_pass_through() {
    assert_eq!(tokenize("cat dog"), vec!["cat", "dog"]);
}

#[test]
fn empty_input() {
    assert_eq!(tokenize(""), Vec::<&str>::new());
    assert_eq!(count(""), 0);
}

#[test]
fn only_the_four_marks_are_delimiters() {
    assert_eq!(
        tokenize("it's state-of-the-art; ok?"),
        vec!["it's", "state-o", "f-the-a", "rt;", "ok", "?"]
    );
}

#[test]
fn multi_line_paragraph() {
    let text = "Tokenization matters.\nCounting quickly helps!\n\nDone?";
    assert_eq!(
        tokenize(text),
        vec![
            "Tokeniz", "ation", "matters", ".", "\n", "Countin", "g", "quickly", "helps", "!",
            "Done", "?",
        ]
    );
}

#[test]
fn repeated_calls_agree() {
    let text = "Repeatability, determinism and purity!";
    assert_eq!(tokenize(text), tokenize(text));
    assert_eq!(count(text), count(text));
}

#[test]
fn tokens_borrow_from_input() {
    let text = String::from("borrowed slices");
    let base = text.as_ptr() as usize;
    for token in tokens(&text) {
        let offset = token.as_ptr() as usize - base;
        assert_eq!(&text[offset..offset + token.len()], token);
    }
}

#[test]
fn large_input_is_counted_linearly() {
    let text = "lorem ipsum dolor sit amet, consectetur adipiscing.\n".repeat(20_000);
    // lorem ipsum dolor sit amet , consect etur adipisc ing . \n
    assert_eq!(count(&text), 12 * 20_000);
}

#[test]
fn tokenizing_from_many_threads_is_safe() {
    let text = "shared input, counted concurrently!";
    let expected = count(text);
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || count(text)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
