//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use rtl_pro::core::process_document;
    use rtl_pro::StorefrontConfig;

    use crate::common::{rtl_and_translation, PRODUCT_PAGE};

    #[test]
    fn translates_and_mirrors_a_page() {
        let result = process_document(PRODUCT_PAGE.as_bytes(), None, &rtl_and_translation()).unwrap();
        let html = String::from_utf8(result).unwrap();

        assert!(html.contains("<html dir=\"rtl\" lang=\"he\""));
        assert!(html.contains("<body dir=\"rtl\" class=\"rtl-pro-loaded\">"));
        assert!(html.contains("<button id=\"add\">הוסף לסל</button>"));
        assert!(html.contains("placeholder=\"חיפוש\""));
        assert!(html.contains("content=\"משלוח חינם\""));
        assert!(html.contains("<h1 style=\"text-align: right;\">"));
        // 邮箱输入框保持从左到右
        assert!(html.contains("type=\"email\" style=\"direction: ltr\""));
    }

    #[test]
    fn keeps_declared_charset() {
        let page = "<html><head><meta charset=\"windows-1255\"></head><body><p>Cart</p></body></html>";
        let config = StorefrontConfig {
            translation_enabled: true,
            ..Default::default()
        };
        let result = process_document(page.as_bytes(), None, &config).unwrap();

        let (expected, _, _) = encoding_rs::WINDOWS_1255.encode("סל קניות");
        assert!(result
            .windows(expected.len())
            .any(|window| window == &expected[..]));
    }

    #[test]
    fn encoding_override_wins_over_meta() {
        let (page, _, _) = encoding_rs::WINDOWS_1255
            .encode("<html><head><meta charset=\"utf-8\"></head><body><p>שלום</p></body></html>");
        let result =
            process_document(&page, Some("windows-1255"), &rtl_and_translation()).unwrap();

        let (decoded, _, _) = encoding_rs::WINDOWS_1255.decode(&result);
        assert!(decoded.contains("<p>שלום</p>"));
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
    use rtl_pro::core::process_document;
    use rtl_pro::parsers::html::serialize_to_string;
    use rtl_pro::{Document, StorefrontConfig};

    use crate::common::PRODUCT_PAGE;

    #[test]
    fn inactive_configuration_changes_nothing() {
        let config = StorefrontConfig {
            font_enabled: true,
            font_family: Some("Heebo".to_string()),
            payment_icons_enabled: true,
            ..Default::default()
        };
        let result = process_document(PRODUCT_PAGE.as_bytes(), None, &config).unwrap();
        let expected = serialize_to_string(&Document::parse(PRODUCT_PAGE)).unwrap();

        assert_eq!(String::from_utf8(result).unwrap(), expected);
    }
}
