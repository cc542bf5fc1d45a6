use super::*;

#[test]
fn link() {
    html(
        "[text](https://example.com)",
        "<p><a href=\"https://example.com\">text</a></p>",
    );
}

#[test]
fn link_with_title() {
    html(
        "[text](https://example.com \"Title\")",
        "<p><a href=\"https://example.com\" title=\"Title\">text</a></p>",
    );
}

#[test]
fn image() {
    html(
        "![alt text](image.png)",
        "<p><img src=\"image.png\" alt=\"alt text\"></img></p>",
    );
}

#[test]
fn image_inside_a_link() {
    html(
        "[![badge](b.png)](https://example.com)",
        "<p><a href=\"https://example.com\"><img src=\"b.png\" alt=\"badge\"></img></a></p>",
    );
}
