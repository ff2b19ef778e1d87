use naver_ad_parser::extractor::{
    clean_linear_text, extract_linear_text, extract_raw_text, extract_with_fallback,
    strip_tags_text, TextSource,
};

#[test]
fn non_rendering_elements_are_dropped() {
    let html = r#"<html><head><title>광고</title></head><body>
        <script>var ad = "hidden.co.kr";</script>
        <style>.lst { color: red; }</style>
        <noscript>자바스크립트를 켜주세요</noscript>
        <p>visible</p>
    </body></html>"#;
    assert_eq!(extract_linear_text(html), "visible");
}

#[test]
fn empty_and_text_less_documents_give_empty_text() {
    assert_eq!(extract_linear_text(""), "");
    assert_eq!(extract_linear_text("<html><body><div><img src=\"a.jpg\"></div></body></html>"), "");
}

#[test]
fn fragments_render_like_full_documents() {
    assert_eq!(extract_linear_text("<div>a</div><div>b</div>"), "a\nb");
}

#[test]
fn whitespace_between_blocks_does_not_make_blank_lines() {
    let html = "<div>a</div>\n      \n<div>b</div>";
    assert_eq!(extract_linear_text(html), "a\nb");
}

#[test]
fn consecutive_breaks_keep_one_blank_line() {
    assert_eq!(extract_linear_text("<p>a<br><br><br><br>b</p>"), "a\n\nb");
}

#[test]
fn trailing_break_in_a_block_adds_no_blank_line() {
    assert_eq!(extract_linear_text("<div>a<br></div><div>b</div>"), "a\nb");
    assert_eq!(extract_linear_text("<div>a<br> </div><p>b</p>"), "a\nb");
    assert_eq!(extract_linear_text("<div>a<br><br></div><div>b</div>"), "a\n\nb");
}

#[test]
fn domain_at_start_of_inline_run_is_split_from_following_text() {
    let html = "<div><span><a>acme.co.kr</a><em>네이버페이</em></span></div>";
    assert_eq!(extract_linear_text(html), "acme.co.kr\n네이버페이");
}

#[test]
fn ad_header_children_land_on_separate_lines() {
    let html = r#"<div class="title_url_area">
        <a class="lnk_head"><span class="lnk_tit">Acme 쇼핑</span></a>
        <a class="url">acme.co.kr</a>
        <span class="npay">네이버페이</span>
    </div>"#;
    assert_eq!(extract_linear_text(html), "Acme 쇼핑\nacme.co.kr\n네이버페이");
}

#[test]
fn inline_markup_with_text_stays_on_one_line() {
    let html = "<p class=\"dsc\">전 상품 <strong>무료배송</strong> 진행중</p>";
    assert_eq!(extract_linear_text(html), "전 상품 무료배송 진행중");
}

#[test]
fn domain_inside_a_line_is_split_out() {
    let html = "<p>Acme 쇼핑 acme.co.kr 네이버페이</p>";
    assert_eq!(extract_linear_text(html), "Acme 쇼핑\nacme.co.kr\n네이버페이");
}

#[test]
fn dotted_names_with_capital_letters_are_not_domains() {
    let html = "<p>Dr.Kim 치과 진료 안내</p>";
    assert_eq!(extract_linear_text(html), "Dr.Kim 치과 진료 안내");
}

#[test]
fn fused_duration_marker_is_split() {
    let html = "<div><span>광고집행기간</span>3개월</div>";
    assert_eq!(extract_linear_text(html), "광고집행기간\n3개월");
}

#[test]
fn marker_characters_in_source_text_are_ignored() {
    let html = "<p>a\u{E000}b</p>";
    assert_eq!(extract_linear_text(html), "ab");
}

#[test]
fn cleaning_is_idempotent_on_extracted_text() {
    let html = r#"<ul><li class="lst">
        <div><span>Acme</span><a>acme.co.kr</a><span>네이버페이</span></div>
        <p>Buy Now</p><p>Great deals here</p><p>a<br><br><br>b</p>
        <div><span>광고집행기간</span>3개월</div>
    </li></ul>"#;
    let text = extract_linear_text(html);
    assert_eq!(clean_linear_text(&text), text);
}

#[test]
fn cleaning_trims_lines_and_caps_blank_runs() {
    assert_eq!(clean_linear_text("  a  \n\n\n\n  b \n \t \nc"), "a\n\nb\n\nc");
}

#[test]
fn raw_text_keeps_source_spacing() {
    let html = "<div>Great   deals\there</div><div>next</div>";
    assert_eq!(extract_raw_text(html), "Great   deals\there\nnext");
    assert_eq!(extract_linear_text(html), "Great deals here\nnext");
}

#[test]
fn tag_stripping_decodes_entities() {
    let html = "<p>A &amp; B</p><p>&#54620;&#xAE00;</p><p>&amp;lt;</p>";
    assert_eq!(strip_tags_text(html), "A & B\n한글\n&lt;");
}

#[test]
fn fallback_prefers_inner_text() {
    let (source, text) = extract_with_fallback("<body><p>hello</p></body>");
    assert_eq!(source, TextSource::Linear);
    assert_eq!(text, "hello");
}

#[test]
fn fallback_reaches_tag_stripping_for_head_only_pages() {
    let html = "<html><head><title>Only title</title></head><body></body></html>";
    let (source, text) = extract_with_fallback(html);
    assert_eq!(source, TextSource::TagStripped);
    assert_eq!(text, "Only title");
}

#[test]
fn fallback_reports_none_when_nothing_renders() {
    let (source, text) = extract_with_fallback("<html><body><!-- nothing --></body></html>");
    assert_eq!(source, TextSource::None);
    assert!(text.is_empty());
}
