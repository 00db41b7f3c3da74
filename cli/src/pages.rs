//! One function per console page: load, paginate, print.

use std::time::Duration;

use chrono::Utc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use registry_console::application::{LocalList, ReleasePages, RemoteList, UserPages};
use registry_console::config::PaginationConfig;
use registry_console::domain::{latest_release, ListUsersParams, Package};
use registry_console::shared::{format_file_size, ApiError, Debouncer};
use registry_console::ConsoleClient;

use crate::PageArgs;

const SEARCH_QUIET_PERIOD: Duration = Duration::from_millis(300);

pub async fn dashboard(client: &ConsoleClient) -> Result<(), ApiError> {
    let stats = client.dashboard().stats().await?;

    println!("Projects   : {}", stats.project_count);
    println!("Packages   : {}", stats.package_count);
    println!("Releases   : {}", stats.release_count);
    println!("Users      : {}", stats.user_count);
    println!("Tenants    : {}", stats.tenant_count);
    println!("Storage    : {}", format_file_size(stats.storage_bytes));
    println!("Downloads  : {} (30 days)", stats.downloads_last_30_days);

    if !stats.recent_releases.is_empty() {
        println!();
        println!("Recent releases:");
        for release in &stats.recent_releases {
            println!(
                "  [{}] {} {} ({})",
                release.icon(),
                release.file_name,
                release.version,
                release.published_at.format("%Y-%m-%d")
            );
        }
    }
    Ok(())
}

pub async fn users(
    client: &ConsoleClient,
    pagination: &PaginationConfig,
    paging: PageArgs,
    search: Option<String>,
    role: Option<String>,
    tenant_id: Option<String>,
) -> Result<(), ApiError> {
    let params = ListUsersParams {
        search,
        role,
        tenant_id,
    };
    let source = UserPages::new(client.clone(), params);
    let mut list = RemoteList::new(source, pagination.state(1, paging.page_size));
    list.refresh().await?;
    list.set_page(paging.page).await?;

    for user in list.items() {
        let status = if user.is_active { "active" } else { "disabled" };
        println!(
            "{:<24} {:<32} {:<9} {}",
            user.label(),
            user.email,
            status,
            user.roles.join(",")
        );
    }
    print_footer(list.state());
    Ok(())
}

pub async fn releases(
    client: &ConsoleClient,
    pagination: &PaginationConfig,
    paging: PageArgs,
    package_id: String,
) -> Result<(), ApiError> {
    let source = ReleasePages::new(client.clone(), package_id);
    let mut list = RemoteList::new(source, pagination.state(1, paging.page_size));
    list.refresh().await?;
    list.set_page(paging.page).await?;

    let mut rows: Vec<_> = list.items().iter().collect();
    rows.sort_by(|a, b| a.cmp_newest_first(b));
    let newest = latest_release(list.items()).map(|r| r.id.clone());

    for release in rows {
        let marker = if Some(&release.id) == newest.as_ref() { "*" } else { " " };
        println!(
            "{marker} {:<14} {:<40} {:>10} {:>8} dl  {}",
            release.version,
            release.file_name,
            release.display_size(),
            release.download_count,
            release.published_at.format("%Y-%m-%d %H:%M")
        );
    }
    print_footer(list.state());
    Ok(())
}

pub async fn packages(
    client: &ConsoleClient,
    pagination: &PaginationConfig,
    paging: PageArgs,
    project_id: Option<String>,
    search: Option<String>,
    interactive: bool,
) -> Result<(), ApiError> {
    let packages = client.packages().list(project_id.as_deref()).await?;
    let mut list = LocalList::with_items(pagination.state(1, paging.page_size), packages);
    if let Some(query) = search {
        apply_package_search(&mut list, query);
    }
    list.set_page(paging.page);
    print_packages(&list);

    if interactive {
        interactive_package_search(list).await;
    }
    Ok(())
}

/// Re-filter the package list from stdin, one query per line. Lines typed
/// or pasted in quick succession only trigger one refresh.
async fn interactive_package_search(mut list: LocalList<Package>) {
    let (debouncer, mut settled) = Debouncer::new(SEARCH_QUIET_PERIOD);

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => debouncer.push(line),
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, "Failed to read search input");
                    break;
                }
            }
        }
    });

    eprintln!("Type a search and press enter, Ctrl-D to quit.");
    while let Some(query) = settled.recv().await {
        apply_package_search(&mut list, query);
        print_packages(&list);
    }
}

fn apply_package_search(list: &mut LocalList<Package>, query: String) {
    let query = query.trim().to_string();
    if query.is_empty() {
        list.clear_filter();
    } else {
        list.apply_filter(move |package| package.matches(&query));
    }
}

fn print_packages(list: &LocalList<Package>) {
    for package in list.visible() {
        println!(
            "[{:<7}] {:<32} {:<8} {:<12} {:>8} dl",
            package.icon(),
            package.name,
            package.kind,
            package.latest_version.as_deref().unwrap_or("-"),
            package.download_count
        );
    }
    print_footer(list.state());
}

pub async fn projects(
    client: &ConsoleClient,
    pagination: &PaginationConfig,
    paging: PageArgs,
) -> Result<(), ApiError> {
    let projects = client.projects().list().await?;
    let list = local_page(projects, pagination, paging);

    for project in list.visible() {
        println!(
            "{:<28} {:>6} packages  {}",
            project.name,
            project.package_count,
            project.description.as_deref().unwrap_or("")
        );
    }
    print_footer(list.state());
    Ok(())
}

pub async fn tenants(
    client: &ConsoleClient,
    pagination: &PaginationConfig,
    paging: PageArgs,
) -> Result<(), ApiError> {
    let tenants = client.tenants().list().await?;
    let list = local_page(tenants, pagination, paging);

    for tenant in list.visible() {
        println!(
            "{:<28} {:>6} users  created {}",
            tenant.name,
            tenant.user_count,
            tenant.created_at.format("%Y-%m-%d")
        );
    }
    print_footer(list.state());
    Ok(())
}

pub async fn roles(client: &ConsoleClient) -> Result<(), ApiError> {
    for role in client.roles().list().await? {
        println!("{:<24} {}", role.name, role.permissions.join(", "));
    }
    Ok(())
}

pub async fn client_access(
    client: &ConsoleClient,
    pagination: &PaginationConfig,
    paging: PageArgs,
) -> Result<(), ApiError> {
    let credentials = client.client_access().list().await?;
    let list = local_page(credentials, pagination, paging);
    let now = Utc::now();

    for access in list.visible() {
        let status = if access.is_active(now) { "active" } else { "inactive" };
        let last_used = access
            .last_used_at
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "never".to_string());
        println!(
            "{:<24} {:<28} {:<8} last used {:<10} {}",
            access.name,
            access.client_id,
            status,
            last_used,
            access.scopes.join(",")
        );
    }
    print_footer(list.state());
    Ok(())
}

pub async fn share_links(
    client: &ConsoleClient,
    pagination: &PaginationConfig,
    paging: PageArgs,
) -> Result<(), ApiError> {
    let links = client.share_links().list().await?;
    let list = local_page(links, pagination, paging);
    let now = Utc::now();

    for link in list.visible() {
        let status = if link.is_usable(now) { "usable" } else { "expired" };
        let limit = link
            .max_downloads
            .map(|max| format!("{}/{}", link.download_count, max))
            .unwrap_or_else(|| link.download_count.to_string());
        println!(
            "{:<8} {:<12} {:>8}  {}",
            status,
            link.release_id,
            limit,
            link.url(client.base_url())
        );
    }
    print_footer(list.state());
    Ok(())
}

fn local_page<T>(items: Vec<T>, pagination: &PaginationConfig, paging: PageArgs) -> LocalList<T> {
    let mut list = LocalList::with_items(pagination.state(1, paging.page_size), items);
    list.set_page(paging.page);
    list
}

fn print_footer(state: &registry_console::PaginationState) {
    println!();
    println!(
        "{}  (page {}/{}, {} per page)",
        state.summary(),
        state.current_page(),
        state.total_pages(),
        state.page_size()
    );
}

#[cfg(test)]
mod tests {
    use registry_console::domain::PackageKind;
    use registry_console::PaginationState;

    use super::*;

    fn package(name: &str, kind: PackageKind) -> Package {
        Package {
            id: name.to_string(),
            project_id: "proj-1".into(),
            name: name.to_string(),
            kind,
            description: None,
            latest_version: None,
            download_count: 0,
            updated_at: Utc::now(),
        }
    }

    fn catalog() -> LocalList<Package> {
        let packages = vec![
            package("left-pad", PackageKind::Npm),
            package("nginx", PackageKind::Docker),
            package("redis", PackageKind::Docker),
            package("serde", PackageKind::Cargo),
        ];
        LocalList::with_items(PaginationState::new(1, 2), packages)
    }

    fn names(list: &LocalList<Package>) -> Vec<&str> {
        list.visible().iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_search_resets_to_first_page_and_blank_clears() {
        let mut list = catalog();
        list.set_page(2);

        apply_package_search(&mut list, " docker ".into());
        assert_eq!(list.state().current_page(), 1);
        assert_eq!(names(&list), vec!["nginx", "redis"]);

        apply_package_search(&mut list, "   ".into());
        assert_eq!(list.len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_burst_applies_only_last_query() {
        let mut list = catalog();
        let (debouncer, mut settled) = Debouncer::new(SEARCH_QUIET_PERIOD);

        for query in ["s", "se", "serde"] {
            debouncer.push(query.to_string());
        }

        let query = settled.recv().await.expect("settled query");
        apply_package_search(&mut list, query);

        assert_eq!(names(&list), vec!["serde"]);
        assert!(settled.try_recv().is_err());
    }
}
