use sqlx::SqlitePool;

use crate::models::post::PostRow;

/// Fields of a post about to be saved.
#[derive(Debug, Clone)]
pub struct NewPost<'a> {
    pub content: &'a str,
    pub tag: &'a str,
    pub length: &'a str,
    pub language: &'a str,
    pub url: Option<&'a str>,
}

pub async fn save_post(pool: &SqlitePool, post: &NewPost<'_>) -> Result<PostRow, sqlx::Error> {
    sqlx::query_as::<_, PostRow>(
        r#"
        INSERT INTO posts (content, tag, length, language, url)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, content, tag, length, language, url, created_at
        "#,
    )
    .bind(post.content)
    .bind(post.tag)
    .bind(post.length)
    .bind(post.language)
    .bind(post.url)
    .fetch_one(pool)
    .await
}

/// All saved posts, newest first.
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<PostRow>, sqlx::Error> {
    sqlx::query_as::<_, PostRow>(
        "SELECT id, content, tag, length, language, url, created_at FROM posts ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await
}

/// Deletes every saved post. Returns the number of rows removed.
pub async fn delete_all_posts(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts").execute(pool).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn post<'a>(content: &'a str, url: Option<&'a str>) -> NewPost<'a> {
        NewPost {
            content,
            tag: "Growth",
            length: "Short",
            language: "English",
            url,
        }
    }

    #[tokio::test]
    async fn test_save_returns_row_with_id() {
        let (pool, _dir) = test_pool().await;
        let saved = save_post(&pool, &post("hello", None)).await.unwrap();
        assert!(saved.id > 0);
        assert_eq!(saved.content, "hello");
        assert_eq!(saved.tag.as_deref(), Some("Growth"));
        assert!(saved.url.is_none());
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let (pool, _dir) = test_pool().await;
        save_post(&pool, &post("first", None)).await.unwrap();
        save_post(&pool, &post("second", Some("https://example.com")))
            .await
            .unwrap();

        let posts = list_posts(&pool).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].content, "second");
        assert_eq!(posts[0].url.as_deref(), Some("https://example.com"));
        assert_eq!(posts[1].content, "first");
    }

    #[tokio::test]
    async fn test_delete_all() {
        let (pool, _dir) = test_pool().await;
        save_post(&pool, &post("a", None)).await.unwrap();
        save_post(&pool, &post("b", None)).await.unwrap();
        assert_eq!(delete_all_posts(&pool).await.unwrap(), 2);
        assert!(list_posts(&pool).await.unwrap().is_empty());
    }
}
