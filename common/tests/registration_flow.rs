use common::admin::{DetailNode, EntityKind, NormalizedRecordList};
use common::admin::render::TextRenderer;
use common::catalog::{ProviderCategory, SubstationCatalog};
use common::error::SubmitError;
use common::form::payload::{LAND_DOCUMENT, LAND_DOCUMENT_TYPE};
use common::form::{FormSession, SubmissionStatus};
use common::model::attachment::Attachment;
use common::model::location::SavedLocation;
use serde_json::{json, Value};

fn type_in(session: &mut FormSession, edits: &[(&str, &str)]) {
    for (path, value) in edits {
        session
            .update_field(path, value)
            .unwrap_or_else(|err| panic!("{} rejected: {}", path, err));
    }
}

fn msedcl_catalog() -> SubstationCatalog {
    SubstationCatalog::from_json(
        ProviderCategory::Msedcl,
        json!([
            {"district": "Nashik", "taluka": "Sinnar", "substation": "Musalgaon"},
            {"district": "Nashik", "taluka": "Niphad", "substation": "Ozar"},
            {"district": "Nashik", "taluka": "Sinnar", "substation": "Malegaon MIDC"},
        ]),
    )
    .unwrap()
}

#[test]
fn complete_registration_round() {
    let mut session = FormSession::new();

    type_in(
        &mut session,
        &[
            ("name", "Asha Patil"),
            ("email", "asha@example.com"),
            ("phone", "98765-43210"),
            ("password", "s3cret"),
            ("projectName", "Sinnar Solar Park"),
            ("capacity.ac", "4.5"),
            ("capacity.dc", "5.2"),
            ("landOwnership", "LEASE"),
            ("statusOfFarm", "PARK"),
            ("expectedCommissioningTimeline.injectionDate", "01022025"),
        ],
    );
    assert_eq!(session.record().phone, "9876543210");

    session.add_location(SavedLocation {
        address: "Gat 41, Musalgaon".to_string(),
        taluka: "Sinnar".to_string(),
        district: "Nashik".to_string(),
        state: "Maharashtra".to_string(),
        lat: Some(19.85),
        lng: Some(74.0),
    });

    assert!(session.select_category(Some(ProviderCategory::Msedcl)));
    assert!(session.load_catalog(msedcl_catalog()));
    session.select_district("Nashik");
    assert_eq!(session.cascade().talukas(), ["Sinnar", "Niphad"]);
    assert!(session.cascade().substations().is_empty());
    session.select_taluka("Sinnar");
    assert_eq!(session.cascade().substations(), ["Musalgaon", "Malegaon MIDC"]);
    session.select_substation("Musalgaon");

    session.attach_document(Attachment::new("lease.pdf", "application/pdf", 2048));

    let payload = session.begin_submit().expect("valid record");
    assert_eq!(payload.text("mobile"), Some("9876543210"));
    assert_eq!(payload.text(LAND_DOCUMENT_TYPE), Some("LEASE"));
    assert_eq!(payload.attachment().map(|a| a.file_name.as_str()), Some("lease.pdf"));
    assert!(payload.parts().iter().any(|p| p.name() == LAND_DOCUMENT));

    let substation: Value = serde_json::from_str(payload.text("substation").unwrap()).unwrap();
    assert_eq!(
        substation,
        json!({"category": "MSEDCL", "district": "Nashik", "taluka": "Sinnar", "substation": "Musalgaon"})
    );
    let location: Value = serde_json::from_str(payload.text("location").unwrap()).unwrap();
    assert_eq!(location["coordinates"]["lat"], json!(19.85));
    let timeline: Value =
        serde_json::from_str(payload.text("expectedCommissioningTimeline").unwrap()).unwrap();
    assert_eq!(timeline["injectionDate"], json!("01/02/2025"));

    assert_eq!(session.begin_submit(), Err(SubmitError::InFlight));

    session.finish_submit(Ok(())).unwrap();
    assert_eq!(session.status(), &SubmissionStatus::Succeeded);
    assert!(session.record().name.is_empty());
    assert!(session.locations().is_empty());
    assert!(session.cascade().catalog().is_none());
}

#[test]
fn invalid_record_never_reaches_the_network() {
    let mut session = FormSession::new();
    type_in(
        &mut session,
        &[
            ("name", "Asha"),
            ("projectName", "P"),
            ("password", "p"),
            ("phone", "5876543210"),
            ("email", "not-an-email"),
            ("expectedCommissioningTimeline.epcWorkStartDate", "31139999"),
        ],
    );

    match session.begin_submit() {
        Err(SubmitError::Invalid(errors)) => {
            let keys: Vec<_> = errors.iter().map(|(k, _)| k).collect();
            assert_eq!(
                keys,
                [
                    "capacity.ac",
                    "email",
                    "expectedCommissioningTimeline.epcWorkStartDate",
                    "phone"
                ]
            );
        }
        other => panic!("expected validation errors, got {:?}", other),
    }
    assert_eq!(session.status(), &SubmissionStatus::Idle);
}

#[test]
fn admin_listing_to_detail_view() {
    let payload = json!({
        "message": "Customers fetched",
        "count": 1,
        "result": [{
            "Name": "Ravi Industries",
            "password": "hunter2",
            "files": [{"fileType": "pdf", "url": "https://cdn.example.com/bill.pdf"}]
        }]
    });
    let list = NormalizedRecordList::from_payload(EntityKind::Consumers, &payload);
    assert_eq!(list.len(), 1);

    let detail = DetailNode::build(&list.records()[0]);
    let text = TextRenderer::render(&detail);
    assert!(text.contains("Ravi Industries"));
    assert!(!text.contains("hunter2"));
    assert_eq!(detail.documents().len(), 1);
}
