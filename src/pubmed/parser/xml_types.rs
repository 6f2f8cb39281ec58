//! Serde types mirroring the EFetch `PubmedArticleSet` schema
//!
//! Only the elements that feed [`PubMedArticle`](crate::pubmed::PubMedArticle)
//! are modelled; everything else is ignored by the deserializer.

use super::deserializers::MixedText;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct PubmedArticleSet {
    #[serde(rename = "PubmedArticle", default)]
    pub articles: Vec<PubmedArticleXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PubmedArticleXml {
    #[serde(rename = "MedlineCitation")]
    pub medline_citation: MedlineCitation,
    #[serde(rename = "PubmedData", default)]
    pub pubmed_data: Option<PubmedData>,
}

#[derive(Debug, Deserialize)]
pub(super) struct MedlineCitation {
    #[serde(rename = "PMID", default)]
    pub pmid: Option<Pmid>,
    #[serde(rename = "Article", default)]
    pub article: Option<ArticleXml>,
    #[serde(rename = "KeywordList", default)]
    pub keyword_lists: Vec<KeywordList>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Pmid {
    #[serde(rename = "$text")]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ArticleXml {
    #[serde(rename = "Journal", default)]
    pub journal: Option<Journal>,
    #[serde(rename = "ArticleTitle", default)]
    pub article_title: Option<MixedText>,
    #[serde(rename = "Pagination", default)]
    pub pagination: Option<Pagination>,
    #[serde(rename = "ELocationID", default)]
    pub elocation_ids: Vec<ELocationId>,
    #[serde(rename = "Abstract", default)]
    pub abstract_: Option<AbstractXml>,
    #[serde(rename = "AuthorList", default)]
    pub author_list: Option<AuthorList>,
    #[serde(rename = "Language", default)]
    pub languages: Vec<String>,
    #[serde(rename = "PublicationTypeList", default)]
    pub publication_type_list: Option<PublicationTypeList>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Journal {
    #[serde(rename = "ISSN", default)]
    pub issn: Option<Issn>,
    #[serde(rename = "JournalIssue", default)]
    pub journal_issue: Option<JournalIssue>,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "ISOAbbreviation", default)]
    pub iso_abbreviation: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Issn {
    #[serde(rename = "$text", default)]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct JournalIssue {
    #[serde(rename = "Volume", default)]
    pub volume: Option<String>,
    #[serde(rename = "Issue", default)]
    pub issue: Option<String>,
    #[serde(rename = "PubDate", default)]
    pub pub_date: Option<PubDate>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct PubDate {
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Season", default)]
    pub season: Option<String>,
    #[serde(rename = "Month", default)]
    pub month: Option<String>,
    #[serde(rename = "Day", default)]
    pub day: Option<String>,
    #[serde(rename = "MedlineDate", default)]
    pub medline_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Pagination {
    #[serde(rename = "MedlinePgn", default)]
    pub medline_pgn: Option<String>,
    #[serde(rename = "StartPage", default)]
    pub start_page: Option<String>,
    #[serde(rename = "EndPage", default)]
    pub end_page: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AbstractXml {
    #[serde(rename = "AbstractText", default)]
    pub abstract_texts: Vec<MixedText>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AuthorList {
    #[serde(rename = "Author", default)]
    pub authors: Vec<AuthorXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AuthorXml {
    #[serde(rename = "LastName", default)]
    pub last_name: Option<String>,
    #[serde(rename = "ForeName", default)]
    pub fore_name: Option<String>,
    #[serde(rename = "Initials", default)]
    pub initials: Option<String>,
    #[serde(rename = "CollectiveName", default)]
    pub collective_name: Option<MixedText>,
    #[serde(rename = "Identifier", default)]
    pub identifiers: Vec<AuthorIdentifier>,
    #[serde(rename = "AffiliationInfo", default)]
    pub affiliation_info: Vec<AffiliationInfo>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AuthorIdentifier {
    #[serde(rename = "@Source", default)]
    pub source: Option<String>,
    #[serde(rename = "$text", default)]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct AffiliationInfo {
    #[serde(rename = "Affiliation", default)]
    pub affiliation: Option<MixedText>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PublicationTypeList {
    #[serde(rename = "PublicationType", default)]
    pub publication_types: Vec<PublicationType>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PublicationType {
    #[serde(rename = "$text", default)]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct KeywordList {
    #[serde(rename = "Keyword", default)]
    pub keywords: Vec<MixedText>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PubmedData {
    #[serde(rename = "ArticleIdList", default)]
    pub article_id_list: Option<ArticleIdList>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ArticleIdList {
    #[serde(rename = "ArticleId", default)]
    pub article_ids: Vec<ArticleId>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ArticleId {
    #[serde(rename = "@IdType", default)]
    pub id_type: Option<String>,
    #[serde(rename = "$text", default)]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ELocationId {
    #[serde(rename = "@EIdType", default)]
    pub id_type: Option<String>,
    #[serde(rename = "$text", default)]
    pub value: String,
}
