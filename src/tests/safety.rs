use super::*;

#[test]
fn script_tags_are_escaped_by_default() {
    html(
        "<script>alert(1)</script>",
        "<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>",
    );
}

#[test]
fn tagfilter_is_case_insensitive() {
    html("<SCRIPT>x</SCRIPT>", "<p>&lt;SCRIPT&gt;x&lt;/SCRIPT&gt;</p>");
}

#[test]
fn attributes_survive_the_tag_escape() {
    html(
        "<iframe src=\"x\">hi</iframe>",
        "<p>&lt;iframe src=&quot;x&quot;&gt;hi&lt;/iframe&gt;</p>",
    );
}

#[test]
fn javascript_urls_are_stripped() {
    html("<a href=\"javascript:alert(1)\">x</a>", "<a\">x</a>");
}

#[test]
fn data_urls_are_stripped_but_data_attributes_kept() {
    html("<img src=\"data:text/html;base64,x\">", "<img\">");
    html(
        "<span data-href=\"javascript:x\">y</span>",
        "<span data-href=\"javascript:x\">y</span>",
    );
}

#[test]
fn sanitization_leaves_markdown_constructs_alone() {
    html(
        "# Title <style>x</style>",
        "<h1>Title &lt;style&gt;x&lt;/style&gt;</h1>",
    );
}

#[test]
fn unsafe_mode_passes_raw_html_through() {
    html_opts!(
        [unsafe_],
        "<script>alert(1)</script>",
        "<script>alert(1)</script>",
    );
}
