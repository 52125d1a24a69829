//! Per-component output checks.

use lettra::{compile, ParseOptions, RenderOptions};

fn render_body(inner: &str) -> String {
	let markup = format!(
		"<mjml><mj-body><mj-section><mj-column>{inner}</mj-column></mj-section></mj-body></mjml>"
	);
	compile(&markup, &ParseOptions::default(), &RenderOptions::default()).unwrap()
}

#[test]
fn button_with_href_renders_an_anchor() {
	let html = render_body("<mj-button href=\"https://example.com\">Go</mj-button>");
	assert!(html.contains("<a href=\"https://example.com\""));
	assert!(html.contains("target=\"_blank\""));
	assert!(html.contains("bgcolor=\"#414141\""));
	assert!(html.contains("border-collapse:separate;"));
	assert!(html.contains(">Go</a>"));
}

#[test]
fn button_without_href_renders_a_paragraph() {
	let html = render_body("<mj-button>Later</mj-button>");
	assert!(html.contains(">Later</p>"));
	assert!(!html.contains("<a "));
}

#[test]
fn image_is_capped_at_the_column_width() {
	let html = render_body("<mj-image src=\"/a.png\" width=\"2000px\" />");
	// 600px body minus the default 25px paddings on each side
	assert!(html.contains("width=\"550\""));
	assert!(html.contains("style=\"width:550px;\""));
	assert!(html.contains("src=\"/a.png\""));
	assert!(html.contains("height=\"auto\""));
}

#[test]
fn fluid_image_registers_the_mobile_style() {
	let html = render_body("<mj-image src=\"/a.png\" fluid-on-mobile=\"true\" />");
	assert!(html.contains("mj-full-width-mobile"));
	assert!(html.contains("@media only screen and (max-width:479px)"));
}

#[test]
fn divider_mirrors_the_border_for_outlook() {
	let html = render_body("<mj-divider border-width=\"2px\" border-color=\"#123456\" />");
	assert!(html.contains("border-top:solid 2px #123456;"));
	// p divider plus the conditional table fallback
	assert!(html.contains("<!--[if mso | IE]><table align=\"center\""));
	assert!(html.contains("width=\"550px\""));
}

#[test]
fn spacer_holds_its_height() {
	let html = render_body("<mj-spacer height=\"42px\" />");
	assert!(html.contains("style=\"height:42px;line-height:42px;\""));
	assert!(html.contains("&#8202;"));
}

#[test]
fn group_keeps_columns_side_by_side_on_mobile() {
	let markup = concat!(
		"<mjml><mj-body><mj-section><mj-group>",
		"<mj-column><mj-text>l</mj-text></mj-column>",
		"<mj-column><mj-text>r</mj-text></mj-column>",
		"</mj-group></mj-section></mj-body></mjml>",
	);
	let html = compile(markup, &ParseOptions::default(), &RenderOptions::default()).unwrap();
	assert!(html.contains("mj-column-per-100"));
	// grouped columns keep an explicit width instead of stacking to 100%
	assert!(html.contains("mj-column-per-50"));
	assert!(html.contains("width:50%"));
}

#[test]
fn wrapper_nests_sections() {
	let markup = concat!(
		"<mjml><mj-body><mj-wrapper background-color=\"#eeeeee\">",
		"<mj-section><mj-column><mj-text>inside</mj-text></mj-column></mj-section>",
		"</mj-wrapper></mj-body></mjml>",
	);
	let html = compile(markup, &ParseOptions::default(), &RenderOptions::default()).unwrap();
	assert!(html.contains("background-color:#eeeeee;"));
	assert!(html.contains("inside"));
	// the wrapped section keeps its own shell
	assert!(html.matches("margin:0px auto;").count() >= 2);
}

#[test]
fn navbar_links_join_the_base_url() {
	let markup = concat!(
		"<mjml><mj-body><mj-section><mj-column>",
		"<mj-navbar base-url=\"https://example.com\">",
		"<mj-navbar-link href=\"/home\">Home</mj-navbar-link>",
		"<mj-navbar-link href=\"/about\">About</mj-navbar-link>",
		"</mj-navbar>",
		"</mj-column></mj-section></mj-body></mjml>",
	);
	let html = compile(markup, &ParseOptions::default(), &RenderOptions::default()).unwrap();
	assert!(html.contains("href=\"https://example.com/home\""));
	assert!(html.contains("href=\"https://example.com/about\""));
	assert!(html.contains("class=\"mj-inline-links\""));
}

#[test]
fn navbar_hamburger_wires_the_checkbox() {
	let markup = concat!(
		"<mjml><mj-body><mj-section><mj-column>",
		"<mj-navbar hamburger=\"hamburger\">",
		"<mj-navbar-link href=\"/home\">Home</mj-navbar-link>",
		"</mj-navbar>",
		"</mj-column></mj-section></mj-body></mjml>",
	);
	let html = compile(markup, &ParseOptions::default(), &RenderOptions::default()).unwrap();
	assert!(html.contains("id=\"00000000\""));
	assert!(html.contains("for=\"00000000\""));
	assert!(html.contains("class=\"mj-menu-checkbox\""));
	assert!(html.contains("mj-menu-icon-open"));
	assert!(html.contains("&#9776;"));
}

#[test]
fn table_wraps_its_rows_with_the_typography() {
	let html = render_body(concat!(
		"<mj-table><tr><th>ref</th><th>qty</th></tr>",
		"<tr><td>A-1</td><td>3</td></tr></mj-table>",
	));
	assert!(html.contains("<tr><th>ref</th><th>qty</th></tr>"));
	assert!(html.contains("<tr><td>A-1</td><td>3</td></tr>"));
	assert!(html.contains("table-layout:auto;"));
	assert!(html.contains("cellpadding=\"0\" cellspacing=\"0\" width=\"100%\""));
	assert!(html.contains("line-height:22px;"));
}

#[test]
fn social_element_pulls_the_network_branding() {
	let html = render_body(concat!(
		"<mj-social>",
		"<mj-social-element name=\"facebook\" href=\"https://example.com\">Share</mj-social-element>",
		"</mj-social>",
	));
	assert!(html.contains("background:#3b5998;"));
	assert!(html.contains(
		"src=\"https://www.mailjet.com/images/theme/v1/icons/ico-social/facebook.png\""
	));
	assert!(html.contains("https://www.facebook.com/sharer/sharer.php?u=https://example.com"));
	assert!(html.contains(">Share</a>"));
	// horizontal mode keeps the elements side by side for Outlook
	assert!(html.contains("display:inline-table;"));
}

#[test]
fn vertical_social_stacks_without_the_outlook_row() {
	let html = render_body(concat!(
		"<mj-social mode=\"vertical\" icon-size=\"30px\">",
		"<mj-social-element name=\"github\" href=\"https://github.example\" />",
		"</mj-social>",
	));
	// no share redirect for github, the href passes through
	assert!(html.contains("href=\"https://github.example\""));
	assert!(html.contains("style=\"margin:0px;\""));
	assert!(!html.contains("display:inline-table"));
	// the container icon-size cascades onto the element
	assert!(html.contains("width=\"30\""));
}

#[test]
fn social_rejects_foreign_children() {
	let markup = concat!(
		"<mjml><mj-body><mj-section><mj-column>",
		"<mj-social><mj-text>nope</mj-text></mj-social>",
		"</mj-column></mj-section></mj-body></mjml>",
	);
	let err = compile(markup, &ParseOptions::default(), &RenderOptions::default()).unwrap_err();
	assert!(matches!(err, lettra::Error::InvalidStructure { parent, child }
		if parent == "mj-social" && child == "mj-text"));
}

#[test]
fn unknown_elements_pass_through() {
	let html = render_body("<mj-text><strong>bold</strong> and <em>italic</em></mj-text>");
	assert!(html.contains("<strong>bold</strong> and <em>italic</em>"));
}

#[test]
fn empty_unknown_elements_self_close_except_script() {
	let html =
		render_body("<mj-text><script src=\"x.js\"></script><img src=\"a.png\"></img></mj-text>");
	// script tags break when written self-closing
	assert!(html.contains("<script src=\"x.js\"></script>"));
	assert!(html.contains("<img src=\"a.png\" />"));
}
