//! Wire-format data model for CRPT submission documents.
//!
//! These are plain records with no behavior; every field is optional and
//! absent fields stay off the wire. Field names follow the endpoint's JSON
//! contract exactly: `importRequest` and `description.participantInn` are
//! camelCase, everything else snake_case.

// self
use crate::_prelude::*;

/// Introduce-goods document accepted by the submission endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
	/// Participant description block.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<Description>,
	/// Document identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub doc_id: Option<String>,
	/// Document status label, e.g. `Draft`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub doc_status: Option<String>,
	/// Document type code.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub doc_type: Option<String>,
	/// Whether the goods were imported.
	#[serde(rename = "importRequest", skip_serializing_if = "Option::is_none")]
	pub import_request: Option<bool>,
	/// Owner taxpayer identification number.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub owner_inn: Option<String>,
	/// Participant taxpayer identification number.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub participant_inn: Option<String>,
	/// Producer taxpayer identification number.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub producer_inn: Option<String>,
	/// Production date, endpoint-formatted string.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub production_date: Option<String>,
	/// Production type code.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub production_type: Option<String>,
	/// Products covered by this document, in submission order.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub products: Option<Vec<Product>>,
	/// Registration date, endpoint-formatted string.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reg_date: Option<String>,
	/// Registration number.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reg_number: Option<String>,
}
impl Document {
	/// Returns the document identifier used to tag transport failures.
	pub fn doc_id(&self) -> Option<&str> {
		self.doc_id.as_deref()
	}
}

/// One product entry within a [`Document`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
	/// Certificate document kind.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub certificate_document: Option<String>,
	/// Certificate document date, endpoint-formatted string.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub certificate_document_date: Option<String>,
	/// Certificate document number.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub certificate_document_number: Option<String>,
	/// Owner taxpayer identification number.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub owner_inn: Option<String>,
	/// Producer taxpayer identification number.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub producer_inn: Option<String>,
	/// Production date, endpoint-formatted string.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub production_date: Option<String>,
	/// Commodity nomenclature code.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tnved_code: Option<String>,
	/// Unit identification code.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub uit_code: Option<String>,
	/// Unit package identification code.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub uitu_code: Option<String>,
}

/// Participant description block nested in a [`Document`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
	/// Participant taxpayer identification number.
	#[serde(rename = "participantInn", skip_serializing_if = "Option::is_none")]
	pub participant_inn: Option<String>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn document_serializes_contract_field_names() {
		let document = Document {
			description: Some(Description { participant_inn: Some("7700000000".into()) }),
			doc_id: Some("123".into()),
			import_request: Some(true),
			products: Some(vec![Product {
				certificate_document: Some("Certificate123".into()),
				..Default::default()
			}]),
			..Default::default()
		};
		let value = serde_json::to_value(&document)
			.expect("Document should serialize for field name checks.");

		assert_eq!(value["importRequest"], serde_json::json!(true));
		assert_eq!(value["description"]["participantInn"], serde_json::json!("7700000000"));
		assert_eq!(
			value["products"][0]["certificate_document"],
			serde_json::json!("Certificate123")
		);
	}

	#[test]
	fn absent_fields_stay_off_the_wire() {
		let value = serde_json::to_value(Document::default())
			.expect("Empty document should serialize.");

		assert_eq!(value, serde_json::json!({}));
	}
}
