use e2e::{browser::Browser, test_server::TestServer};

#[tokio::test]
#[ignore = "needs Chrome and a built web server"]
async fn picker_keeps_the_page_and_swaps_the_prefix() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&server.url_for("/en/menu/"))
        .expect("Failed to navigate");
    assert_eq!(page.text_of("h1").expect("heading"), "Menu");

    page.click(".lang_toggle").expect("open picker");
    page.click("a.lang_option[hreflang='ru']")
        .expect("pick Russian");
    page.wait_for_url(&server.url_for("/ru/menu/")).expect("russian url");
    assert_eq!(page.text_of("h1").expect("heading"), "Меню");

    page.click(".lang_toggle").expect("open picker");
    page.click("a.lang_option[hreflang='de']")
        .expect("pick German");
    page.wait_for_url(&server.url_for("/menu/")).expect("german url");
    assert_eq!(page.text_of("h1").expect("heading"), "Speisekarte");
}

#[tokio::test]
#[ignore = "needs Chrome and a built web server"]
async fn back_navigation_restores_the_language() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&server.url_for("/menu/"))
        .expect("Failed to navigate");
    page.click(".lang_toggle").expect("open picker");
    page.click("a.lang_option[hreflang='uz']")
        .expect("pick Uzbek");
    page.wait_for_url(&server.url_for("/uz/menu/")).expect("uzbek url");

    page.back().expect("history back");
    page.wait_for_url(&server.url_for("/menu/")).expect("back to german");
    assert_eq!(page.text_of("h1").expect("heading"), "Speisekarte");
}
