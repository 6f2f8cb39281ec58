//! Conversion from XML schema types into public article models

use super::xml_types::{AuthorXml, PubDate, PubmedArticleXml};
use crate::pubmed::models::{Affiliation, Author, PubMedArticle};

impl PubmedArticleXml {
    /// PMID of this entry, if the citation carries one
    pub(super) fn pmid(&self) -> Option<&str> {
        self.medline_citation
            .pmid
            .as_ref()
            .map(|p| p.value.trim())
            .filter(|p| !p.is_empty())
    }

    pub(super) fn into_article(self, pmid: String) -> PubMedArticle {
        let citation = self.medline_citation;
        let article = citation.article;

        let keywords: Vec<String> = citation
            .keyword_lists
            .into_iter()
            .flat_map(|list| list.keywords)
            .filter_map(|k| k.into_trimmed())
            .collect();

        let article_ids = self
            .pubmed_data
            .and_then(|d| d.article_id_list)
            .map(|l| l.article_ids)
            .unwrap_or_default();
        let article_id = |kind: &str| {
            article_ids
                .iter()
                .find(|id| id.id_type.as_deref() == Some(kind))
                .map(|id| id.value.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut doi = article_id("doi");
        let pmc_id = article_id("pmc");

        let Some(article) = article else {
            return PubMedArticle {
                pmid,
                title: String::new(),
                authors: Vec::new(),
                journal: String::new(),
                journal_abbreviation: None,
                issn: None,
                volume: None,
                issue: None,
                pages: None,
                pub_date: String::new(),
                language: None,
                doi,
                pmc_id,
                abstract_text: None,
                article_types: Vec::new(),
                keywords,
            };
        };

        if doi.is_none() {
            doi = article
                .elocation_ids
                .iter()
                .find(|e| e.id_type.as_deref() == Some("doi"))
                .map(|e| e.value.trim().to_string())
                .filter(|v| !v.is_empty());
        }

        let journal = article.journal;
        let journal_issue = journal.as_ref().and_then(|j| j.journal_issue.as_ref());

        let abstract_text = article.abstract_.and_then(|a| {
            let sections: Vec<String> = a
                .abstract_texts
                .into_iter()
                .filter_map(|t| t.into_trimmed())
                .collect();
            if sections.is_empty() {
                None
            } else {
                Some(sections.join(" "))
            }
        });

        let pages = article.pagination.and_then(|p| {
            p.medline_pgn.filter(|s| !s.is_empty()).or_else(|| {
                match (p.start_page, p.end_page) {
                    (Some(start), Some(end)) => Some(format!("{start}-{end}")),
                    (Some(start), None) => Some(start),
                    _ => None,
                }
            })
        });

        PubMedArticle {
            pmid,
            title: article
                .article_title
                .and_then(|t| t.into_trimmed())
                .unwrap_or_default(),
            authors: article
                .author_list
                .map(|l| l.authors.into_iter().filter_map(convert_author).collect())
                .unwrap_or_default(),
            journal: journal
                .as_ref()
                .and_then(|j| j.title.clone())
                .unwrap_or_default(),
            journal_abbreviation: journal.as_ref().and_then(|j| j.iso_abbreviation.clone()),
            issn: journal
                .as_ref()
                .and_then(|j| j.issn.as_ref())
                .map(|i| i.value.trim().to_string())
                .filter(|v| !v.is_empty()),
            volume: journal_issue.and_then(|i| i.volume.clone()),
            issue: journal_issue.and_then(|i| i.issue.clone()),
            pages,
            pub_date: journal_issue
                .and_then(|i| i.pub_date.as_ref())
                .map(format_pub_date)
                .unwrap_or_default(),
            language: article.languages.into_iter().next(),
            doi,
            pmc_id,
            abstract_text,
            article_types: article
                .publication_type_list
                .map(|l| {
                    l.publication_types
                        .into_iter()
                        .map(|t| t.value.trim().to_string())
                        .filter(|t| !t.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            keywords,
        }
    }
}

fn convert_author(author: AuthorXml) -> Option<Author> {
    let collective = author.collective_name.and_then(|c| c.into_trimmed());
    let last_name = author.last_name.or(collective);
    let full_name = format_author_name(
        last_name.as_deref(),
        author.fore_name.as_deref(),
        author.initials.as_deref(),
    )?;

    let orcid = author
        .identifiers
        .into_iter()
        .find(|id| id.source.as_deref() == Some("ORCID"))
        .map(|id| id.value.trim().to_string());

    let affiliations = author
        .affiliation_info
        .into_iter()
        .filter_map(|info| info.affiliation.and_then(|a| a.into_trimmed()))
        .map(|text| Affiliation { text })
        .collect();

    Some(Author {
        last_name,
        fore_name: author.fore_name,
        initials: author.initials,
        full_name,
        affiliations,
        orcid,
    })
}

/// "ForeName LastName", falling back to initials; `None` when nothing is named
fn format_author_name(
    last_name: Option<&str>,
    fore_name: Option<&str>,
    initials: Option<&str>,
) -> Option<String> {
    let given = fore_name.or(initials).filter(|s| !s.is_empty());
    let name = match (given, last_name.filter(|s| !s.is_empty())) {
        (Some(given), Some(last)) => format!("{given} {last}"),
        (None, Some(last)) => last.to_string(),
        (Some(given), None) => given.to_string(),
        (None, None) => return None,
    };
    Some(name)
}

fn format_pub_date(date: &PubDate) -> String {
    if let Some(medline_date) = &date.medline_date {
        return medline_date.clone();
    }
    [&date.year, &date.season, &date.month, &date.day]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
