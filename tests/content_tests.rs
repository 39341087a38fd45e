mod common;

#[cfg(test)]
pub mod content_tests {
    use std::collections::HashSet;

    use batavia::common::*;
    use batavia::content::*;
    use batavia::models::*;

    #[test]
    fn test_site_route_from_path_success() {
        assert_eq!(SiteRoute::from_path("/").unwrap(), SiteRoute::Home);
        assert_eq!(SiteRoute::from_path("/galeri/").unwrap(), SiteRoute::Galeri);
        assert_eq!(SiteRoute::from_path("/profile?ref=nav#legalitas").unwrap(), SiteRoute::Profile);
        assert_eq!("/kargo-proyek".parse::<SiteRoute>().unwrap(), SiteRoute::KargoProyek);
    }

    #[test]
    fn test_site_route_from_path_fails_on_unknown() {
        assert_eq!(
            SiteRoute::from_path("/blog"),
            Err(RouteError::Unknown("/blog".to_string()))
        );
    }

    #[test]
    fn test_site_route_paths_are_unique_success() {
        let paths: HashSet<_> = SiteRoute::ALL.iter().map(SiteRoute::path).collect();
        assert_eq!(paths.len(), SiteRoute::ALL.len());

        for route in SiteRoute::ALL {
            assert_eq!(SiteRoute::from_path(route.path()).unwrap(), route);
        }
    }

    #[test]
    fn test_site_route_implemented_success() {
        let implemented: Vec<_> = SiteRoute::implemented().collect();
        assert_eq!(
            implemented,
            vec![
                SiteRoute::Home,
                SiteRoute::Profile,
                SiteRoute::VisiMisi,
                SiteRoute::Nilai,
                SiteRoute::Galeri,
            ]
        );
        assert!(!SiteRoute::Kontak.is_implemented());
    }

    #[test]
    fn test_nav_items_success() {
        let items = nav_items();
        let labels: Vec<_> = items.iter().map(|i| i.label).collect();

        assert_eq!(labels, ["Beranda", "Tentang Kami", "Layanan", "Galeri", "Kontak"]);
        assert_eq!(items[0].href(), Some("/"));
        assert!(items[1].is_dropdown());
        assert_eq!(items[1].children().len(), 3);
        assert_eq!(items[2].children().len(), 4);
        assert!(items[3].children().is_empty());
    }

    #[test]
    fn test_nav_about_dropdown_is_implemented_success() {
        let about = &nav_items()[1];
        assert!(about.href().is_none());
        assert!(about.children().iter().all(|l| l.route.is_implemented()));
    }

    #[test]
    fn test_nav_cta_success() {
        assert_eq!(NAV_CTA_LABEL, "Konsultasi Gratis");
        assert_eq!(NAV_CTA_ROUTE.path(), "/kontak");
    }

    #[test]
    fn test_page_meta_success() {
        let home = page_meta(SiteRoute::Home);
        assert!(home.keywords.is_some());
        assert!(home.open_graph.is_some());
        assert!(home.twitter.is_some());

        let profile = page_meta(SiteRoute::Profile);
        assert_eq!(profile.robots, Some("index, follow"));
        assert!(profile.open_graph.is_some());
        assert!(profile.twitter.is_none());

        for route in SiteRoute::implemented() {
            assert_ne!(page_meta(route), &NOT_FOUND_META);
            assert!(!page_meta(route).title.is_empty());
        }
    }

    #[test]
    fn test_page_meta_fails_on_unimplemented_route() {
        assert_eq!(page_meta(SiteRoute::Pergudangan), &NOT_FOUND_META);
        assert_eq!(NOT_FOUND_META.robots, Some("noindex"));
    }

    #[test]
    fn test_filter_gallery_success() {
        assert_eq!(filter_gallery("").len(), gallery_images().len());
        assert_eq!(filter_gallery("dokumentasi").len(), gallery_images().len());

        let hits = filter_gallery("PROJECT 3");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].number, 3);
        assert_eq!(hits[0].caption(), "Dokumentasi • 3");
    }

    #[test]
    fn test_filter_gallery_fails_on_no_match() {
        assert!(filter_gallery("kapal").is_empty());
        assert!(filter_gallery("project 0").is_empty());
    }

    #[test]
    fn test_gallery_numbers_start_at_one_success() {
        let numbers: Vec<_> = gallery_images().iter().map(|g| g.number).collect();
        assert_eq!(numbers, (1..=gallery_images().len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_mosaic_span_success() {
        assert_eq!(mosaic_span(0), "col-span-2 row-span-2");
        assert_eq!(mosaic_span(3), "col-span-2");
        assert_eq!(mosaic_span(5), "");
    }

    #[test]
    fn test_marquee_logos_success() {
        let logos = partner_logos();
        assert_eq!(logos.len(), 19);
        assert_eq!(logos.first().map(String::as_str), Some("/logos/3.png"));
        assert_eq!(logos.last().map(String::as_str), Some("/logos/21.png"));

        let marquee = marquee_logos();
        assert_eq!(marquee.len(), 2 * logos.len());
        assert_eq!(&marquee[..logos.len()], &marquee[logos.len()..]);
    }

    #[test]
    fn test_home_content_success() {
        assert_eq!(SERVICES.len(), 4);
        assert_eq!(TESTIMONIALS.len(), 3);
        assert_eq!(MISSIONS.len(), 6);
        assert_eq!(LEGAL_DOCS.len(), 4);

        let categories: HashSet<_> = SERVICES.iter().map(|s| s.category).collect();
        assert_eq!(categories.len(), ServiceCategory::ALL.len());
    }

    #[test]
    fn test_media_origins_success() {
        let origins = media_origins();
        assert!(origins.contains(&SITE_URL));
        assert!(LOGO_URL.starts_with(SITE_URL));
        assert!(HERO_VIDEO.starts_with(SITE_URL));
    }

    #[test]
    fn test_not_found_message_success() {
        assert_eq!(not_found_message("/kontak"), "Halaman /kontak sedang kami siapkan.");
        assert_eq!(
            not_found_message("/pergudangan/?ref=nav"),
            "Halaman /pergudangan sedang kami siapkan."
        );
    }

    #[test]
    fn test_not_found_message_fails_on_implemented_or_unknown_path() {
        let generic = "Halaman yang Anda cari tidak ditemukan atau telah dipindahkan.";
        assert_eq!(not_found_message("/profile/"), generic);
        assert_eq!(not_found_message("/galeri/"), generic);
        assert_eq!(not_found_message("/blog"), generic);
    }
}
