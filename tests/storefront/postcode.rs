//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use rtl_pro::events::{EventKind, EventLog};
    use rtl_pro::parsers::html::{get_node_attr, serialize_to_string, set_node_attr};
    use rtl_pro::postcode::{lookup_postcode, select_value, PostcodeResolver, POSTCODE_CITIES};
    use rtl_pro::{Document, Storefront, StorefrontConfig};

    use crate::common::{by_id, CHECKOUT_FORM};

    fn postcode_config() -> StorefrontConfig {
        StorefrontConfig {
            rtl_enabled: true,
            postcode_detection: true,
            ..Default::default()
        }
    }

    #[test]
    fn typing_tel_aviv_postcode_fills_city() {
        let mut storefront = Storefront::init(Document::parse(CHECKOUT_FORM), postcode_config());
        let zip = by_id(storefront.document(), "zip");
        let city = by_id(storefront.document(), "city");

        let fill = storefront.input(&zip, "6120000");

        assert_eq!(fill.city, Some("תל אביב-יפו"));
        assert!(fill.city_updated);
        assert!(fill.country_selected);
        assert_eq!(get_node_attr(&city, "value").as_deref(), Some("תל אביב-יפו"));
        assert_eq!(
            select_value(&by_id(storefront.document(), "country")).as_deref(),
            Some("IL")
        );
    }

    #[test]
    fn every_mapped_prefix_fills_the_city_field() {
        let document = Document::parse(CHECKOUT_FORM);
        let mut resolver = PostcodeResolver::new();
        assert_eq!(resolver.attach_listeners(&document), 1);

        let zip = by_id(&document, "zip");
        let city = by_id(&document, "city");

        for (prefix, expected) in POSTCODE_CITIES {
            let mut events = EventLog::default();
            set_node_attr(&city, "value", None);

            let fill = resolver.handle_input(&zip, &format!("{prefix}00000"), &mut events);

            assert_eq!(fill.city, Some(*expected), "prefix {prefix}");
            assert_eq!(get_node_attr(&city, "value").as_deref(), Some(*expected));
            assert_eq!(
                events.kinds_for(&city),
                vec![EventKind::Input, EventKind::Change]
            );
        }
    }

    #[test]
    fn non_digits_are_stripped_before_lookup() {
        assert_eq!(lookup_postcode(" 61-200 "), Some("תל אביב-יפו"));
    }

    #[test]
    fn city_select_picks_matching_option() {
        let document = Document::parse(
            "<form><input id=zip name=zipcode>\
             <select id=city name=shipping_city>\
             <option value=''>בחר עיר</option>\
             <option value=haifa>חיפה</option>\
             <option value=jlm>ירושלים</option>\
             </select></form>",
        );
        let config = postcode_config();
        let mut storefront = Storefront::init(document, config);
        let zip = by_id(storefront.document(), "zip");
        let city = by_id(storefront.document(), "city");

        let fill = storefront.input(&zip, "9100000");
        assert!(fill.city_updated);
        assert!(!fill.country_selected);
        assert_eq!(select_value(&city).as_deref(), Some("jlm"));
        assert_eq!(storefront.events().len(), 1);
        assert_eq!(storefront.events()[0].kind, EventKind::Change);
    }

    #[test]
    fn listeners_are_attached_once_per_field() {
        let document = Document::parse(CHECKOUT_FORM);
        let mut resolver = PostcodeResolver::new();

        assert_eq!(resolver.attach_listeners(&document), 1);
        assert_eq!(resolver.attach_listeners(&document), 0);
        assert_eq!(resolver.listener_count(), 1);
    }

    #[test]
    fn already_processed_page_still_fills_city() {
        let first = Storefront::init(Document::parse(CHECKOUT_FORM), postcode_config());
        let processed = serialize_to_string(first.document()).unwrap();
        assert!(processed.contains("data-rtl-pro-postcode=\"true\""));

        let mut storefront = Storefront::init(Document::parse(&processed), postcode_config());
        let zip = by_id(storefront.document(), "zip");
        let city = by_id(storefront.document(), "city");

        assert_eq!(storefront.postcode().unwrap().listener_count(), 1);
        let fill = storefront.input(&zip, "6120000");
        assert_eq!(fill.city, Some("תל אביב-יפו"));
        assert_eq!(get_node_attr(&city, "value").as_deref(), Some("תל אביב-יפו"));
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
    use rtl_pro::parsers::html::get_node_attr;
    use rtl_pro::postcode::lookup_postcode;
    use rtl_pro::{Document, Storefront, StorefrontConfig};

    use crate::common::{by_id, CHECKOUT_FORM};

    fn postcode_config() -> StorefrontConfig {
        StorefrontConfig {
            rtl_enabled: true,
            postcode_detection: true,
            ..Default::default()
        }
    }

    #[test]
    fn unmapped_prefix_leaves_city_alone() {
        let mut storefront = Storefront::init(Document::parse(CHECKOUT_FORM), postcode_config());
        let zip = by_id(storefront.document(), "zip");
        let city = by_id(storefront.document(), "city");

        let fill = storefront.input(&zip, "0012345");
        assert!(fill.city.is_none());
        assert!(get_node_attr(&city, "value").is_none());
        assert!(storefront.events().is_empty());
    }

    #[test]
    fn short_postcode_is_not_looked_up() {
        assert_eq!(lookup_postcode("6"), None);
        assert_eq!(lookup_postcode("a-6"), None);
        assert_eq!(lookup_postcode(""), None);
    }

    #[test]
    fn detection_disabled_attaches_nothing() {
        let config = StorefrontConfig {
            postcode_detection: false,
            ..postcode_config()
        };
        let mut storefront = Storefront::init(Document::parse(CHECKOUT_FORM), config);
        let zip = by_id(storefront.document(), "zip");

        assert!(storefront.postcode().is_none());
        assert!(storefront.input(&zip, "6120000").city.is_none());
        assert!(get_node_attr(&by_id(storefront.document(), "city"), "value").is_none());
    }

    #[test]
    fn input_outside_form_resolves_without_filling() {
        let document = Document::parse("<input id=zip name=zip><input id=city name=city>");
        let mut storefront = Storefront::init(document, postcode_config());
        let zip = by_id(storefront.document(), "zip");

        let fill = storefront.input(&zip, "6120000");
        assert_eq!(fill.city, Some("תל אביב-יפו"));
        assert!(!fill.city_updated);
        assert!(storefront.events().is_empty());
    }
}
