//! Shell-style brace expansion.

#[derive(Debug)]
enum Node {
    Text(String),
    Group(Vec<Vec<Node>>),
}

/// Expands every balanced `{a,b,...}` group of `input` into its alternatives.
///
/// Groups nest and may hold empty alternatives (`e{d,}` gives `ed` and `e`).
/// A group without a comma is replaced by its content. Braces that do not
/// pair up are kept as literal text. The expansions come out in a fixed
/// order, leftmost group varying slowest; duplicates are kept.
///
/// # Examples
/// ```
/// use kata_solver::braces::expand_braces;
///
/// let files: Vec<String> = expand_braces("thumbnail.{png,jp{e,}g}").collect();
/// assert_eq!(files, ["thumbnail.png", "thumbnail.jpeg", "thumbnail.jpg"]);
/// ```
pub fn expand_braces(input: &str) -> impl Iterator<Item = String> {
    let chars: Vec<char> = input.chars().collect();
    expand(&parse_sequence(&chars)).into_iter()
}

fn parse_sequence(s: &[char]) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut text = String::new();
    let mut i = 0;
    while i < s.len() {
        if s[i] == '{' {
            if let Some(close) = matching_close(s, i) {
                if !text.is_empty() {
                    nodes.push(Node::Text(std::mem::take(&mut text)));
                }
                let alternatives = split_alternatives(&s[i + 1..close])
                    .into_iter()
                    .map(parse_sequence)
                    .collect();
                nodes.push(Node::Group(alternatives));
                i = close + 1;
                continue;
            }
        }
        text.push(s[i]);
        i += 1;
    }
    if !text.is_empty() {
        nodes.push(Node::Text(text));
    }
    nodes
}

fn matching_close(s: &[char], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, &ch) in s.iter().enumerate().skip(open) {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

// The content of a matched group is balanced, so depth never underflows.
fn split_alternatives(s: &[char]) -> Vec<&[char]> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, &ch) in s.iter().enumerate() {
        match ch {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

fn expand(nodes: &[Node]) -> Vec<String> {
    let mut results = vec![String::new()];
    for node in nodes {
        match node {
            Node::Text(text) => {
                for result in &mut results {
                    result.push_str(text);
                }
            }
            Node::Group(alternatives) => {
                let tails: Vec<String> = alternatives.iter().flat_map(|alt| expand(alt)).collect();
                results = results
                    .iter()
                    .flat_map(|head| tails.iter().map(move |tail| format!("{}{}", head, tail)))
                    .collect();
            }
        }
    }
    results
}
