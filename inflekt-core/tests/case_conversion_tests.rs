//! Case-style conversions and naming helpers

use inflekt_core::Ruleset;

fn rules() -> Ruleset {
    Ruleset::with_defaults()
}

fn with_html() -> Ruleset {
    let mut rs = rules();
    rs.add_acronym("HTML");
    rs
}

#[test]
fn test_underscore() {
    let rs = rules();
    assert_eq!(rs.underscore("BigBen"), "big_ben");
    assert_eq!(rs.underscore("SomeText"), "some_text");
    assert_eq!(rs.underscore("some-text"), "some_text");
    assert_eq!(rs.underscore("Hello World"), "hello_world");
    assert_eq!(rs.underscore("already_underscored"), "already_underscored");
}

#[test]
fn test_underscore_folds_acronyms() {
    let rs = rules();
    assert_eq!(rs.underscore("APIClient"), "api_client");
    assert_eq!(rs.underscore("HTTPSConnection"), "https_connection");
    assert_eq!(rs.underscore("MyWiFiRouter"), "my_wifi_router");

    // unregistered acronyms split letter by letter
    assert_eq!(rs.underscore("HTMLParser"), "h_t_m_l_parser");
    assert_eq!(with_html().underscore("HTMLParser"), "html_parser");
}

#[test]
fn test_dasherize() {
    let rs = with_html();
    assert_eq!(rs.dasherize("SomeText"), "some-text");
    assert_eq!(rs.dasherize("street_address"), "street-address");
    assert_eq!(rs.dasherize("HTMLParser"), "html-parser");
}

#[test]
fn test_camelize() {
    let rs = rules();
    assert_eq!(rs.camelize("dino_party"), "DinoParty");
    assert_eq!(rs.camelize("active_model_errors"), "ActiveModelErrors");
    assert_eq!(rs.camelize("big-ben"), "BigBen");
    assert_eq!(rs.camelize("http_request"), "HttpRequest");
    assert_eq!(rs.camelize("id"), "ID");
    assert_eq!(rs.camelize("ID"), "ID");
}

#[test]
fn test_camelize_down_first() {
    let rs = rules();
    assert_eq!(rs.camelize_down_first("dino_party"), "dinoParty");
    assert_eq!(rs.camelize_down_first("active_record"), "activeRecord");
}

#[test]
fn test_capitalize() {
    let rs = rules();
    assert_eq!(rs.capitalize("id"), "ID");
    assert_eq!(rs.capitalize("hello world"), "Hello world");
}

#[test]
fn test_titleize() {
    let rs = rules();
    assert_eq!(rs.titleize("hello there"), "Hello There");
    assert_eq!(rs.titleize("dino_party"), "Dino Party");
    assert_eq!(rs.titleize("active_record"), "Active Record");
    assert_eq!(rs.titleize("x-men: the last stand"), "X Men The Last Stand");
}

#[test]
fn test_titleize_restores_acronyms() {
    let rs = with_html();
    assert_eq!(rs.titleize("html parser"), "HTML Parser");
    assert_eq!(rs.titleize("HTMLParser"), "HTML Parser");

    let mut rs = rules();
    rs.add_acronym("IP");
    assert_eq!(rs.titleize("ipAddress"), "IP Address");
}

#[test]
fn test_titleize_keeps_ordinary_words_with_defaults() {
    let rs = rules();
    assert_eq!(rs.titleize("blog post"), "Blog Post");
    assert_eq!(rs.titleize("the cat man"), "The Cat Man");
    assert_eq!(rs.titleize("ram rip"), "Ram Rip");
    assert_eq!(rs.titleize("pop music"), "Pop Music");
    assert_eq!(rs.titleize("api client"), "Api Client");
}

#[test]
fn test_titleize_single_letter_runs() {
    let mut rs = Ruleset::new();
    assert_eq!(rs.titleize("u s a"), "U S A");
    rs.add_acronym("USA");
    assert_eq!(rs.titleize("u s a"), "USA");
    assert_eq!(rs.titleize("made in u s a"), "Made In USA");
    assert_eq!(rs.titleize("a b u s a"), "A B U S A");
}

#[test]
fn test_humanize() {
    let rs = rules();
    assert_eq!(rs.humanize("employee_salary"), "Employee salary");
    assert_eq!(rs.humanize("author_id"), "Author");
    assert_eq!(rs.humanize("underscored_words"), "Underscored words");
    assert_eq!(rs.humanize("Some Words"), "Some words");
    assert_eq!(with_html().humanize("HTMLParser"), "Html parser");
}

#[test]
fn test_foreign_keys() {
    let rs = rules();
    assert_eq!(rs.foreign_key("Person"), "person_id");
    assert_eq!(rs.foreign_key("Message"), "message_id");
    assert_eq!(rs.foreign_key("AdminPost"), "admin_post_id");
    assert_eq!(rs.foreign_key("people"), "person_id");
    assert_eq!(rs.foreign_key_condensed("Person"), "personid");
    assert_eq!(rs.foreign_key_to_attribute("person_id"), "PersonID");
    assert_eq!(rs.foreign_key_to_attribute("name"), "Name");
}

#[test]
fn test_tableize() {
    let rs = rules();
    assert_eq!(rs.tableize("SuperPerson"), "super_people");
    assert_eq!(rs.tableize("RawScaledScorer"), "raw_scaled_scorers");
    assert_eq!(rs.tableize("fancyCategory"), "fancy_categories");
    assert_eq!(rs.tableize("Person"), "people");
    assert_eq!(rs.tableize("app.blog_posts"), "blog_posts");
}

#[test]
fn test_typeify() {
    let rs = rules();
    assert_eq!(rs.typeify("app.blog_posts"), "BlogPost");
    assert_eq!(rs.typeify("people"), "Person");
    assert_eq!(rs.typeify("statuses"), "Status");
}

#[test]
fn test_parameterize() {
    let rs = rules();
    assert_eq!(rs.parameterize("Donald E. Knuth"), "donald-e-knuth");
    assert_eq!(rs.parameterize("Crème Brûlée!"), "creme-brulee");
    assert_eq!(rs.parameterize_join("Hello World", "_"), "hello_world");
}

#[test]
fn test_ordinalize() {
    let rs = rules();
    assert_eq!(rs.ordinalize("1"), "1st");
    assert_eq!(rs.ordinalize("11"), "11th");
    assert_eq!(rs.ordinalize("22"), "22nd");
    assert_eq!(rs.ordinalize("113"), "113th");
    assert_eq!(rs.ordinalize("first"), "first");
}
