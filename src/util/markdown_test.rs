use super::*;

#[test]
fn renders_emphasis_and_paragraphs() {
    let html = render_assistant_html("We offer **free shipping** on all orders.");
    assert!(html.contains("<strong>free shipping</strong>"));
    assert!(html.starts_with("<p>"));
}

#[test]
fn renders_bullet_lists() {
    let html = render_assistant_html("- washable\n- hypoallergenic");
    assert!(html.contains("<li>washable</li>"));
}

#[test]
fn strips_raw_html_from_model_output() {
    let html = render_assistant_html("hi <script>alert(1)</script> there");
    assert!(!html.contains("<script>"));
    assert!(html.contains("hi"));
}
