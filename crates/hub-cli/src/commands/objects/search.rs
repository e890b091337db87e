//! Search records command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;

use hubkit_core::{Filter, SearchRequest, Sort};

use super::{Target, print_records};
use crate::cli::GlobalArgs;
use crate::{context, output};

#[derive(Args, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub target: Target,

    /// Filter as property:OPERATOR[:value]; repeated filters must all match
    #[arg(long = "filter", value_name = "FILTER")]
    pub filters: Vec<String>,

    /// Alternative filter group; each occurrence is ORed with the others
    #[arg(long = "or-filter", value_name = "FILTER")]
    pub or_filters: Vec<String>,

    /// Free-text query
    #[arg(long)]
    pub query: Option<String>,

    /// Sort as property[:asc|:desc]
    #[arg(long)]
    pub sort: Vec<String>,

    /// Properties to return (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub properties: Vec<String>,

    /// Maximum number of results
    #[arg(long)]
    pub limit: Option<u32>,

    /// Pagination cursor from a previous search
    #[arg(long)]
    pub after: Option<String>,

    /// Print raw JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: SearchArgs, global: &GlobalArgs) -> Result<()> {
    let request = build_request(&args)?;
    let client = context::client(global)?;

    let page = client
        .resources_in(args.target.family)
        .search(&args.target.resource, &request)
        .await
        .with_context(|| format!("Failed to search {}", args.target.resource))?;

    if args.json {
        return output::json_pretty(&page);
    }

    if page.results.is_empty() {
        eprintln!("{}", "No matching records.".dimmed());
    } else {
        print_records(&page.results, &args.properties);
    }

    if let Some(total) = page.total {
        eprintln!("{}: {}", "Total".dimmed(), total);
    }
    if let Some(cursor) = page.next_cursor() {
        eprintln!("{}: {}", "Next cursor".dimmed(), cursor);
    }

    Ok(())
}

fn build_request(args: &SearchArgs) -> Result<SearchRequest> {
    let mut request = SearchRequest::new();

    if !args.filters.is_empty() {
        let filters = args
            .filters
            .iter()
            .map(|f| parse_filter(f))
            .collect::<Result<Vec<_>>>()?;
        request = request.or_group(filters);
    }
    for raw in &args.or_filters {
        request = request.or_group(vec![parse_filter(raw)?]);
    }

    for raw in &args.sort {
        request = request.sort(parse_sort(raw)?);
    }
    if let Some(query) = &args.query {
        request = request.query(query.as_str());
    }
    if !args.properties.is_empty() {
        request = request.properties(&args.properties);
    }
    if let Some(limit) = args.limit {
        request = request.limit(limit);
    }
    if let Some(after) = &args.after {
        request = request.after(after.as_str());
    }

    Ok(request)
}

fn parse_filter(raw: &str) -> Result<Filter> {
    match Filter::parse(raw) {
        Some(filter) => Ok(filter),
        None => bail!("Invalid filter '{}': expected property:OPERATOR[:value]", raw),
    }
}

fn parse_sort(raw: &str) -> Result<Sort> {
    let (property, direction) = raw.split_once(':').unwrap_or((raw, "asc"));
    if property.is_empty() {
        bail!("Invalid sort '{}': missing property", raw);
    }
    match direction.to_ascii_lowercase().as_str() {
        "asc" | "ascending" => Ok(Sort::ascending(property)),
        "desc" | "descending" => Ok(Sort::descending(property)),
        other => bail!("Invalid sort direction '{}': expected asc or desc", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hubkit_core::{ApiFamily, ResourceType, SortDirection};

    fn args() -> SearchArgs {
        SearchArgs {
            target: Target {
                resource: ResourceType::new("contacts").unwrap(),
                family: ApiFamily::CrmV3,
            },
            filters: Vec::new(),
            or_filters: Vec::new(),
            query: None,
            sort: Vec::new(),
            properties: Vec::new(),
            limit: None,
            after: None,
            json: false,
        }
    }

    #[test]
    fn and_filters_share_a_group() {
        let mut args = args();
        args.filters = vec![
            "email:CONTAINS_TOKEN:*@example.com".into(),
            "lifecyclestage:EQ:lead".into(),
        ];
        args.or_filters = vec!["phone:HAS_PROPERTY".into()];

        let request = build_request(&args).unwrap();
        assert_eq!(request.filter_groups.len(), 2);
        assert_eq!(request.filter_groups[0].filters.len(), 2);
        assert_eq!(request.filter_groups[1].filters[0].value, None);
    }

    #[test]
    fn sort_directions() {
        assert_eq!(
            parse_sort("createdate").unwrap().direction,
            SortDirection::Ascending
        );
        assert_eq!(
            parse_sort("createdate:DESC").unwrap().direction,
            SortDirection::Descending
        );
        assert!(parse_sort("createdate:sideways").is_err());
        assert!(parse_sort(":desc").is_err());
    }

    #[test]
    fn malformed_filter_is_rejected() {
        assert!(parse_filter("email").is_err());
        assert!(parse_filter(":EQ:x").is_err());
    }
}
