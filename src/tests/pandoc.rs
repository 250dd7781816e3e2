use super::PandocFormat;
use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use crate::node::Block;
use crate::segmenter::segment;
use crate::Error;

const INTRO_BODY: &str = r#"{"pandoc-api-version":[1,23,1],"meta":{},"blocks":[
{"t":"Header","c":[1,["intro",[],[]],[{"t":"Str","c":"Intro"}]]},
{"t":"Para","c":[{"t":"Str","c":"Hello"},{"t":"Space"},{"t":"Emph","c":[{"t":"Str","c":"world"}]}]},
{"t":"Header","c":[1,["body",[],[]],[{"t":"Str","c":"Body"}]]},
{"t":"Para","c":[{"t":"Str","c":"First"}]},
{"t":"Para","c":[{"t":"Str","c":"Second"}]}
]}"#;

fn segments(json: &str) -> Vec<Vec<String>> {
    segment(&PandocFormat.parse(json).unwrap()).into_texts()
}

#[test]
fn test_headers_and_paragraphs() {
    assert_eq!(
        segments(INTRO_BODY),
        vec![vec!["Intro", "Hello world"], vec!["Body", "First", "Second"]]
    );
}

#[test]
fn test_matches_markdown_reader() {
    let markdown = MarkdownFormat
        .parse("# Intro\n\nHello *world*\n\n# Body\n\nFirst\n\nSecond\n")
        .unwrap();
    assert_eq!(
        segment(&markdown).into_texts(),
        segments(INTRO_BODY),
        "both readers should segment the same document identically"
    );
}

#[test]
fn test_empty_blocks() {
    let json = r#"{"pandoc-api-version":[1,23,1],"meta":{},"blocks":[]}"#;
    assert!(segments(json).is_empty());
}

#[test]
fn test_lists_code_and_raw() {
    let json = r#"{"pandoc-api-version":[1,23,1],"meta":{},"blocks":[
{"t":"OrderedList","c":[[2,{"t":"Decimal"},{"t":"Period"}],[[{"t":"Plain","c":[{"t":"Str","c":"two"}]}],[{"t":"Plain","c":[{"t":"Str","c":"three"}]}]]]},
{"t":"CodeBlock","c":[["",["python"],[]],"print(1)"]},
{"t":"RawBlock","c":["html","<br>"]}
]}"#;
    let document = PandocFormat.parse(json).unwrap();
    assert!(matches!(
        &document.blocks[0],
        Block::OrderedList { start: 2, .. }
    ));
    assert!(matches!(
        &document.blocks[1],
        Block::CodeBlock { language: Some(lang), .. } if lang == "python"
    ));
    assert_eq!(
        segment(&document).into_texts(),
        vec![vec!["two\nthree", "two", "three", "print(1)", "<br>"]]
    );
}

#[test]
fn test_line_block_and_definition_list() {
    let json = r#"{"pandoc-api-version":[1,23,1],"meta":{},"blocks":[
{"t":"LineBlock","c":[[{"t":"Str","c":"line"},{"t":"Space"},{"t":"Str","c":"one"}],[{"t":"Str","c":"line"},{"t":"Space"},{"t":"Str","c":"two"}]]},
{"t":"DefinitionList","c":[[[{"t":"Str","c":"Term"}],[[{"t":"Plain","c":[{"t":"Str","c":"meaning"}]}]]]]}
]}"#;
    assert_eq!(
        segments(json),
        vec![vec!["line one\nline two", "Term\nmeaning", "meaning"]]
    );
}

#[test]
fn test_div_quoted_and_link() {
    let json = r#"{"pandoc-api-version":[1,23,1],"meta":{},"blocks":[
{"t":"Div","c":[["",["note"],[]],[
  {"t":"Para","c":[
    {"t":"Quoted","c":[{"t":"DoubleQuote"},[{"t":"Str","c":"hi"}]]},
    {"t":"Space"},
    {"t":"Link","c":[["",[],[]],[{"t":"Str","c":"there"}],["https://example.com",""]]}
  ]}
]]}
]}"#;
    assert_eq!(
        segments(json),
        vec![vec!["\"hi\" there", "\"hi\" there"]]
    );
}

#[test]
fn test_table_cells_captured() {
    let cell = |text: &str| {
        format!(r#"[["",[],[]],{{"t":"AlignDefault"}},1,1,[{{"t":"Plain","c":[{{"t":"Str","c":"{text}"}}]}}]]"#)
    };
    let row = |a: &str, b: &str| format!(r#"[["",[],[]],[{},{}]]"#, cell(a), cell(b));
    let json = format!(
        r#"{{"pandoc-api-version":[1,23,1],"meta":{{}},"blocks":[
{{"t":"Table","c":[["",[],[]],[null,[]],[[{{"t":"AlignDefault"}},{{"t":"ColWidthDefault"}}],[{{"t":"AlignDefault"}},{{"t":"ColWidthDefault"}}]],
[["",[],[]],[{}]],
[[["",[],[]],0,[],[{}]]],
[["",[],[]],[]]]}}
]}}"#,
        row("h1", "h2"),
        row("a", "b")
    );
    assert_eq!(segments(&json), vec![vec!["h1", "h2", "a", "b"]]);
}

#[test]
fn test_unknown_kinds_become_other() {
    let json = r#"{"pandoc-api-version":[1,23,1],"meta":{},"blocks":[
{"t":"FancyBlock","c":{"anything":true}},
{"t":"Para","c":[{"t":"FancyInline"},{"t":"Str","c":"kept"}]}
]}"#;
    let document = PandocFormat.parse(json).unwrap();
    assert_eq!(document.blocks[0], Block::Other("FancyBlock".to_string()));
    assert_eq!(segment(&document).into_texts(), vec![vec!["kept"]]);
}

#[test]
fn test_malformed_header_is_an_error() {
    let json = r#"{"pandoc-api-version":[1,23,1],"meta":{},"blocks":[{"t":"Header","c":"oops"}]}"#;
    assert!(matches!(PandocFormat.parse(json), Err(Error::Json(_))));
}

#[test]
fn test_not_json_is_an_error() {
    assert!(matches!(PandocFormat.parse("# markdown"), Err(Error::Json(_))));
}

#[test]
fn test_pre_1_21_table_layout() {
    let cell = |text: &str| format!(r#"[{{"t":"Plain","c":[{{"t":"Str","c":"{text}"}}]}}]"#);
    let json = format!(
        r#"{{"pandoc-api-version":[1,20],"meta":{{}},"blocks":[
{{"t":"Header","c":[1,["prices",[],[]],[{{"t":"Str","c":"Prices"}}]]}},
{{"t":"Table","c":[[{{"t":"Str","c":"Menu"}}],[{{"t":"AlignDefault"}},{{"t":"AlignDefault"}}],[0,0],
[{},{}],
[[{},{}]]]}}
]}}"#,
        cell("Item"),
        cell("Cost"),
        cell("Tea"),
        cell("2")
    );
    let document = PandocFormat.parse(&json).unwrap();
    let Block::Table(table) = &document.blocks[1] else {
        panic!("expected a table, got {:?}", document.blocks[1]);
    };
    assert_eq!(table.rows.len(), 2);
    assert_eq!(
        segment(&document).into_texts(),
        vec![vec!["Prices", "Menu", "Item", "Cost", "Tea", "2"]]
    );
}

#[test]
fn test_unreadable_table_kept_as_other() {
    let json = r#"{"pandoc-api-version":[1,23,1],"meta":{},"blocks":[
{"t":"Table","c":[1,2]},
{"t":"Figure","c":"oops"},
{"t":"Para","c":[{"t":"Str","c":"after"}]}
]}"#;
    let document = PandocFormat.parse(json).unwrap();
    assert_eq!(document.blocks[0], Block::Other("Table".to_string()));
    assert_eq!(document.blocks[1], Block::Other("Figure".to_string()));
    assert_eq!(segment(&document).into_texts(), vec![vec!["after"]]);
}
