//! Deserialization of a full reaction document as served by the ELN API.

use eln_common::{MaterialRole, Reaction, ReactionId, ReactionStatus};

const DOCUMENT: &str = r#"{
    "id": 2031,
    "short_label": "CU1-R7",
    "status": "Not Successful",
    "description": {"ops": [{"insert": "Dissolve "}, {"insert": "1", "attributes": {"bold": true}}, {"insert": " in THF.\n"}]},
    "literatures": [{"title": "J. Org. Chem. 2019", "url": "https://doi.org/10.1021/x"}],
    "reaction_svg_file": "0a1b2c.svg",
    "tlc_description": "",
    "tlc_solvents": null,
    "rf_value": "0.2",
    "purification": null,
    "observation": "no conversion after 24 h",
    "solvents": [{"preferred_label": "THF", "real_amount_value": null, "target_amount_value": 12.5}],
    "solvent": "",
    "dangerous_products": ["Toxic"],
    "starting_materials": [{
        "short_label": "CU1-7-A",
        "molecule": {"sum_formula": "C6H5Br", "iupac_name": "bromobenzene", "molecule_svg_file": "sm.svg"},
        "amount_g": 0.157,
        "amount_l": 0.000105,
        "amount_mol": 0.001,
        "equivalent": 1.0,
        "analyses": null
    }],
    "reactants": [],
    "products": [{
        "short_label": "CU1-7-P",
        "molecule": {"sum_formular": "C12H10"},
        "amount_g": null,
        "equivalent": 0,
        "analyses": [null, {"kind": "1H NMR", "content": "", "description": "no product"}],
        "extra_field": {"ignored": true}
    }],
    "collection_id": 5
}"#;

#[test]
fn full_document_deserializes() {
    let reaction = Reaction::from_json(DOCUMENT).expect("document parses");

    assert_eq!(reaction.id, Some(ReactionId(2031)));
    assert_eq!(reaction.status(), Some(ReactionStatus::NotSuccessful));
    assert_eq!(reaction.description.plain_text(), "Dissolve 1 in THF.\n");
    assert_eq!(reaction.rf_value.as_deref(), Some("0.2"));
    assert!(reaction.purification.is_empty());
    assert_eq!(reaction.dangerous_products, vec!["Toxic"]);

    let starting = reaction.materials(MaterialRole::StartingMaterial);
    assert_eq!(starting.len(), 1);
    assert_eq!(starting[0].molecule.sum_formular.as_deref(), Some("C6H5Br"));
    assert!(starting[0].analyses.is_empty());

    assert!(reaction.materials(MaterialRole::Reactant).is_empty());

    let product = &reaction.materials(MaterialRole::Product)[0];
    assert_eq!(product.amount_g, None);
    assert_eq!(product.equivalent, Some(0.0));
    let analyses: Vec<usize> = product.analyses().map(|(idx, _)| idx).collect();
    assert_eq!(analyses, vec![1]);
    assert!(product.has_analyses());
}

#[test]
fn empty_document_is_all_absent() {
    let reaction = Reaction::from_json("{}").expect("empty object parses");
    assert_eq!(reaction.id, None);
    assert_eq!(reaction.status(), None);
    assert!(!reaction.description.is_present());
    for role in MaterialRole::ALL {
        assert!(reaction.materials(role).is_empty());
    }
}

#[test]
fn null_entries_from_sparse_exports_decode() {
    let json = r#"{
        "literatures": [null],
        "solvents": [null, {"preferred_label": "EtOH"}],
        "purification": [null, "Column"],
        "products": [{"short_label": "P1", "molecule": null}, null]
    }"#;
    let reaction = Reaction::from_json(json).expect("sparse document parses");

    assert!(reaction.literatures.is_empty());
    assert_eq!(reaction.solvents.len(), 1);
    assert_eq!(reaction.purification, vec!["Column"]);

    let products = reaction.materials(MaterialRole::Product);
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].short_label.as_deref(), Some("P1"));
    assert_eq!(products[0].molecule.molecule_svg_file, None);
}
