use serde::{Deserialize, Serialize};

/// Author affiliation as written in the record
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Affiliation {
    pub text: String,
}

/// Author of a PubMed article
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Author {
    /// Family name, or the collective name for group authors
    pub last_name: Option<String>,
    pub fore_name: Option<String>,
    pub initials: Option<String>,
    /// Display name ("ForeName LastName")
    pub full_name: String,
    pub affiliations: Vec<Affiliation>,
    /// ORCID identifier if listed
    pub orcid: Option<String>,
}

/// Represents a PubMed article with metadata
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PubMedArticle {
    /// PubMed ID
    pub pmid: String,
    /// Article title
    pub title: String,
    /// List of authors
    pub authors: Vec<Author>,
    /// Journal name
    pub journal: String,
    /// ISO journal abbreviation (e.g., "J Biol Chem")
    pub journal_abbreviation: Option<String>,
    /// ISSN (International Standard Serial Number)
    pub issn: Option<String>,
    /// Journal volume
    pub volume: Option<String>,
    /// Journal issue number
    pub issue: Option<String>,
    /// Page range (e.g., "123-130")
    pub pages: Option<String>,
    /// Publication date, space separated parts (e.g., "2020 Mar 05")
    pub pub_date: String,
    /// Article language (e.g., "eng")
    pub language: Option<String>,
    /// DOI (Digital Object Identifier)
    pub doi: Option<String>,
    /// PMC ID with prefix (e.g., "PMC7092803")
    pub pmc_id: Option<String>,
    /// Abstract text, structured sections joined with a space
    pub abstract_text: Option<String>,
    /// Publication types (e.g., "Journal Article", "Review")
    pub article_types: Vec<String>,
    /// Author-provided keywords
    pub keywords: Vec<String>,
}
