//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use rtl_pro::parsers::html::{
        elements, get_node_attr, get_parent_node, has_class, is_element, text_content,
    };
    use rtl_pro::payment::CONTAINER_CLASS;
    use rtl_pro::{Document, Storefront, StorefrontConfig};

    use crate::common::{by_id, html_of, rtl_and_translation, PRODUCT_PAGE};

    #[test]
    fn button_placeholder_and_direction() {
        let document = Document::parse(
            "<html><body><button id=b>Add to cart</button><input id=s placeholder=\"Search\"></body></html>",
        );
        let storefront = Storefront::init(document, rtl_and_translation());
        let document = storefront.document();

        assert_eq!(text_content(&by_id(document, "b")), "הוסף לסל");
        assert_eq!(
            get_node_attr(&by_id(document, "s"), "placeholder").as_deref(),
            Some("חיפוש")
        );
        assert_eq!(
            get_node_attr(&document.html().unwrap(), "dir").as_deref(),
            Some("rtl")
        );
    }

    #[test]
    fn merchant_button_texts_override_dictionary() {
        let config = StorefrontConfig {
            buy_now_text: Some("לקנייה מהירה".to_string()),
            add_to_cart_text: Some("לסל".to_string()),
            ..rtl_and_translation()
        };
        let storefront = Storefront::init(Document::parse(PRODUCT_PAGE), config);
        let document = storefront.document();

        assert_eq!(text_content(&by_id(document, "add")), "לסל");
        assert_eq!(text_content(&by_id(document, "buy")), "לקנייה מהירה");
    }

    #[test]
    fn merchant_translations_extend_dictionary() {
        let mut config = rtl_and_translation();
        config
            .translations
            .insert("Product".to_string(), "מוצר".to_string());
        let storefront = Storefront::init(Document::parse(PRODUCT_PAGE), config);

        assert!(html_of(storefront.document()).contains(">מוצר</h1>"));
    }

    #[test]
    fn surrounding_whitespace_is_preserved() {
        let document = Document::parse("<p id=p>\n    Add to cart  </p>");
        let storefront = Storefront::init(document, rtl_and_translation());

        assert_eq!(
            text_content(&by_id(storefront.document(), "p")),
            "\n    הוסף לסל  "
        );
    }

    #[test]
    fn font_and_payment_icons_are_injected() {
        let config = StorefrontConfig {
            font_enabled: true,
            font_family: Some("Rubik".to_string()),
            font_size: Some(17),
            payment_icons_enabled: true,
            payment_icons: Some(vec!["paypal".to_string(), "apple-pay".to_string()]),
            ..rtl_and_translation()
        };
        let storefront = Storefront::init(Document::parse(PRODUCT_PAGE), config);
        let document = storefront.document();

        let style = by_id(document, "rtl-pro-font");
        assert!(is_element(&get_parent_node(&style).unwrap(), "head"));
        assert!(text_content(&style).contains("font-size: 17px;"));

        let container = document
            .find_first(|n| has_class(n, CONTAINER_CLASS))
            .unwrap();
        assert_eq!(
            get_node_attr(&get_parent_node(&container).unwrap(), "id").as_deref(),
            Some("site-footer")
        );
        let labels: Vec<String> = elements(&container)
            .filter_map(|n| get_node_attr(&n, "aria-label"))
            .collect();
        assert_eq!(labels, vec!["אמצעי תשלום מקובלים", "PayPal", "Apple Pay"]);
    }

    #[test]
    fn layout_and_translation_are_idempotent() {
        let storefront = Storefront::init(Document::parse(PRODUCT_PAGE), rtl_and_translation());
        let first = html_of(storefront.document());

        storefront.apply_layout();
        let stats = storefront.translate();
        assert_eq!(stats.total(), 0);
        assert_eq!(html_of(storefront.document()), first);
    }

    #[test]
    fn into_document_returns_the_transformed_tree() {
        let storefront = Storefront::init(Document::parse(PRODUCT_PAGE), rtl_and_translation());
        let document = storefront.into_document();

        assert!(has_class(&document.body().unwrap(), "rtl-pro-loaded"));
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use rtl_pro::parsers::html::text_content;
    use rtl_pro::{Document, Storefront, StorefrontConfig};

    use crate::common::{by_id, html_of, rtl_and_translation, PRODUCT_PAGE};

    #[test]
    fn case_variants_without_entries_stay_english() {
        let document = Document::parse("<p id=p>add to cart</p><p id=q>Add to cart now</p>");
        let storefront = Storefront::init(document, rtl_and_translation());

        assert_eq!(text_content(&by_id(storefront.document(), "p")), "add to cart");
        assert_eq!(
            text_content(&by_id(storefront.document(), "q")),
            "Add to cart now"
        );
    }

    #[test]
    fn scripts_and_styles_are_not_translated() {
        let document =
            Document::parse("<body><script>Cart</script><style>Cart</style><p>Cart</p></body>");
        let storefront = Storefront::init(document, rtl_and_translation());
        let html = html_of(storefront.document());

        assert!(html.contains("<script>Cart</script>"));
        assert!(html.contains("<style>Cart</style>"));
        assert!(html.contains("<p>סל קניות</p>"));
    }

    #[test]
    fn inactive_handle_ignores_host_calls() {
        let config = StorefrontConfig::default();
        let storefront = Storefront::init(Document::parse(PRODUCT_PAGE), config);
        let before = html_of(storefront.document());

        storefront.apply_layout();
        storefront.translate();
        storefront.on_section_load();
        assert_eq!(html_of(storefront.document()), before);
    }

    #[test]
    fn missing_footer_skips_payment_icons() {
        let config = StorefrontConfig {
            payment_icons_enabled: true,
            ..rtl_and_translation()
        };
        let storefront = Storefront::init(Document::parse("<main>Cart</main>"), config);
        assert!(!html_of(storefront.document()).contains("rtl-pro-payment-icons"));
    }
}
