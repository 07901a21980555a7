use std::time::Instant;

use reqwest::Client;

use crate::Result;

static STUDENT_URL: &str = "https://inucoop.com/main.php?mkey=2&w=2";
static FACULTY_URL: &str = "https://inucoop.com/main.php?mkey=2&w=3";

pub fn make_client() -> Client {
    Client::builder()
        .gzip(true)
        .build()
        .expect("client creation should succeed")
}

/// Weekly menu board for the student cafeteria (학생 식당).
pub async fn student_menu_page(client: &Client) -> Result<String> {
    menu_page(client, STUDENT_URL).await
}

/// Weekly menu board for the faculty cafeteria (교직원 식당).
pub async fn faculty_menu_page(client: &Client) -> Result<String> {
    menu_page(client, FACULTY_URL).await
}

async fn menu_page(client: &Client, url: &str) -> Result<String> {
    let start = Instant::now();
    let response = client.get(url).send().await?;
    let text = response.text().await?;
    log::trace!("got menu board page in\t{:?}", start.elapsed());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Local};

    use super::*;
    use crate::parse::extract;

    #[tokio::test]
    #[ignore = "hits the live co-op site"]
    async fn test_fetch_student_menu_page() {
        let client = make_client();
        let page = student_menu_page(&client).await.unwrap();
        let items = extract(&page, Local::now().weekday());
        println!("{items:#?}");
    }

    #[tokio::test]
    #[ignore = "hits the live co-op site"]
    async fn test_fetch_faculty_menu_page() {
        let client = make_client();
        let page = faculty_menu_page(&client).await.unwrap();
        assert!(!page.is_empty());
    }
}
