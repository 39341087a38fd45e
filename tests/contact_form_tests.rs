mod common;

#[cfg(test)]
pub mod contact_form_tests {
    use super::common::*;

    use batavia::common::*;
    use batavia::forms::*;
    use batavia::models::*;

    #[test]
    fn test_contact_form_submit_success() {
        let mut form = get_seed_form_budi();

        let (request, toast) = form.submit().expect("complete form is accepted");

        assert_eq!(request.name, "Budi");
        assert_eq!(request.email, "budi@x.com");
        assert_eq!(request.services, vec![ServiceCategory::Distribution]);
        assert_eq!(request.message, None);

        assert!(!toast.is_destructive());
        assert!(toast.description.contains("Budi"));
        assert!(form.is_empty());
        assert!(form.services().is_empty());
    }

    #[test]
    fn test_contact_form_submit_fails_on_missing_name() {
        let mut form = get_seed_form_missing_name();
        let before = form.clone();

        let toast = form.submit().unwrap_err();

        assert!(toast.is_destructive());
        assert!(toast.description.contains(ContactField::Name.label()));
        assert_eq!(form, before);
        assert!(form.is_selected(ServiceCategory::Special));
    }

    #[test]
    fn test_contact_form_validate_fails_on_blank_fields() {
        let form = get_seed_contact_form("   ", "  ", &[]);

        let err = form.validate().unwrap_err();

        assert_eq!(
            err.missing(),
            &[ContactField::Name, ContactField::Email, ContactField::Services]
        );
        assert_eq!(
            err,
            ContactFormError::Incomplete {
                missing: vec![ContactField::Name, ContactField::Email, ContactField::Services],
            }
        );
    }

    #[test]
    fn test_contact_form_validate_fails_on_no_service() {
        let form = get_seed_contact_form("Budi", "budi@x.com", &[]);
        let err = form.validate().unwrap_err();
        assert_eq!(err.missing(), &[ContactField::Services]);
    }

    #[test]
    fn test_contact_form_validate_trims_fields_success() {
        let mut form = get_seed_contact_form("  Budi ", " budi@x.com ", &["planning"]);
        form.message = "  Kirim penawaran  ".to_string();

        let request = form.validate().unwrap();

        assert_eq!(request.name, "Budi");
        assert_eq!(request.email, "budi@x.com");
        assert_eq!(request.message.as_deref(), Some("Kirim penawaran"));
    }

    #[test]
    fn test_contact_form_toggle_service_success() {
        let mut form = ContactForm::new();

        form.toggle_service(ServiceCategory::Special);
        form.toggle_service(ServiceCategory::Planning);
        assert_eq!(
            form.services(),
            &[ServiceCategory::Special, ServiceCategory::Planning]
        );

        form.toggle_service(ServiceCategory::Special);
        assert_eq!(form.services(), &[ServiceCategory::Planning]);
        assert!(!form.is_selected(ServiceCategory::Special));
    }

    #[test]
    fn test_service_category_from_str_success() {
        assert_eq!(parse_service("Distribusi & Logistik"), ServiceCategory::Distribution);
        assert_eq!(parse_service("layanan khusus"), ServiceCategory::Special);
        assert_eq!(parse_service("OPERATIONS"), ServiceCategory::Operations);
    }

    #[test]
    fn test_service_category_from_str_fails_on_unknown() {
        assert!("Pergudangan".parse::<ServiceCategory>().is_err());
    }

    #[test]
    fn test_toast_constructors_success() {
        let ok = Toast::success("Permintaan Terkirim", "Terima kasih");
        let err = Toast::destructive("Formulir Belum Lengkap", "Mohon lengkapi: nama");

        assert_eq!(ok.variant, ToastVariant::Success);
        assert!(err.is_destructive());
        assert_eq!(TOAST_DURATION.as_secs(), 5);
    }
}
