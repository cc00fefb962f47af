//! End-to-end routing for a poll application's URL table: an index page,
//! a question detail page, a results page, and a vote endpoint expressed
//! as a raw regex route.

use grappelli_exception::Error;
use grappelli_http::{Request, Response, Result};
use grappelli_urls::{DefaultRouter, Route, Router, function, path, re_path};
use rstest::rstest;

async fn index(_req: Request) -> Result<Response> {
	Ok(Response::ok().with_body("index"))
}

async fn detail(req: Request) -> Result<Response> {
	let question_id = req.path_params.get_int("question_id")?;
	Ok(Response::ok().with_body(format!("detail {}", question_id)))
}

async fn results(req: Request) -> Result<Response> {
	let question_id = req.path_params.get_int("question_id")?;
	Ok(Response::ok().with_body(format!("results {}", question_id)))
}

async fn vote(req: Request) -> Result<Response> {
	let question_id = req.path_params.get_int("question_id")?;
	Ok(Response::redirect(format!("/polls/{}/results/", question_id)))
}

fn polls_urlpatterns() -> Vec<Route> {
	vec![
		path("", function(index)).unwrap().with_name("index"),
		path("{question_id:int}/", function(detail))
			.unwrap()
			.with_name("detail"),
		path("{question_id:int}/results/", function(results))
			.unwrap()
			.with_name("results"),
		re_path(r"^(?P<question_id>[0-9]+)/vote/$", function(vote))
			.unwrap()
			.with_name("vote"),
	]
}

fn polls_router() -> DefaultRouter {
	let mut router = DefaultRouter::new();
	router
		.mount("/polls", polls_urlpatterns(), Some("polls".to_string()))
		.unwrap();
	router
}

fn bare_router() -> DefaultRouter {
	let mut router = DefaultRouter::new();
	for route in polls_urlpatterns() {
		router.add_route(route);
	}
	router
}

#[rstest]
#[case("", "index")]
#[case("5/", "detail")]
#[case("5/results/", "results")]
#[case("5/vote/", "vote")]
fn test_table_resolves_by_name(#[case] url: &str, #[case] expected: &str) {
	let router = bare_router();
	assert_eq!(
		router.resolve(url).unwrap().full_name(),
		Some(expected.to_string())
	);
}

#[rstest]
#[case("0/", 0)]
#[case("5/", 5)]
#[case("1234/", 1234)]
fn test_detail_captures_integer(#[case] url: &str, #[case] expected: i64) {
	let router = bare_router();
	let matched = router.resolve(url).unwrap();
	assert_eq!(matched.params.get_int("question_id").unwrap(), expected);
}

#[test]
fn test_vote_route_captures_through_regex() {
	let router = bare_router();
	let matched = router.resolve("17/vote/").unwrap();
	assert_eq!(matched.full_name(), Some("vote".to_string()));
	assert_eq!(matched.params.get_int("question_id").unwrap(), 17);
}

#[test]
fn test_index_has_no_params() {
	let router = bare_router();
	let matched = router.resolve("").unwrap();
	assert!(matched.params.is_empty());
}

#[rstest]
#[case("abc/")]
#[case("abc/vote/")]
#[case("5")]
#[case("5/votes/")]
#[case("5/vote")]
#[case("-1/")]
#[case("5.0/")]
fn test_unmatched_paths_are_not_found(#[case] url: &str) {
	let router = bare_router();
	assert!(
		matches!(router.resolve(url), Err(Error::NotFound(_))),
		"expected NotFound for {:?}",
		url
	);
}

#[test]
fn test_mounted_table_resolves_with_namespace() {
	let router = polls_router();
	assert_eq!(
		router.resolve("/polls/").unwrap().full_name(),
		Some("polls:index".to_string())
	);
	assert_eq!(
		router.resolve("/polls/5/results/").unwrap().full_name(),
		Some("polls:results".to_string())
	);
	assert_eq!(
		router.resolve("/polls/5/vote/").unwrap().full_name(),
		Some("polls:vote".to_string())
	);
}

#[test]
fn test_mounted_table_rejects_unprefixed_paths() {
	let router = polls_router();
	assert!(router.resolve("5/").is_err());
	assert!(router.resolve("/polls/abc/").is_err());
}

#[test]
fn test_reverse_unmounted() {
	let router = bare_router();
	assert_eq!(
		router.reverse_with::<&str>("index", &[]).unwrap(),
		""
	);
	assert_eq!(
		router
			.reverse_with("detail", &[("question_id", "5")])
			.unwrap(),
		"5/"
	);
	assert_eq!(
		router
			.reverse_with("vote", &[("question_id", "5")])
			.unwrap(),
		"5/vote/"
	);
}

#[test]
fn test_reverse_mounted() {
	let router = polls_router();
	assert_eq!(
		router
			.reverse_with("polls:detail", &[("question_id", "5")])
			.unwrap(),
		"/polls/5/"
	);
	assert_eq!(
		router
			.reverse_with("polls:results", &[("question_id", "12")])
			.unwrap(),
		"/polls/12/results/"
	);
}

#[test]
fn test_reverse_then_resolve_round_trip() {
	let router = polls_router();
	let url = router
		.reverse_with("polls:detail", &[("question_id", "42")])
		.unwrap();
	let matched = router.resolve(&url).unwrap();
	assert_eq!(matched.full_name(), Some("polls:detail".to_string()));
	assert_eq!(matched.params.get_int("question_id").unwrap(), 42);
}

#[test]
fn test_reverse_errors() {
	let router = polls_router();
	assert!(matches!(
		router.reverse_with::<&str>("polls:nonexistent", &[]),
		Err(Error::NotFound(_))
	));
	assert!(matches!(
		router.reverse_with::<&str>("polls:detail", &[]),
		Err(Error::MissingParameter(_))
	));
	assert!(matches!(
		router.reverse_with("polls:detail", &[("question_id", "5/../admin")]),
		Err(Error::Validation(_))
	));
}

#[tokio::test]
async fn test_dispatch_detail() {
	let router = polls_router();
	let request = Request::builder().uri("/polls/34/").build().unwrap();
	let response = router.route(request).await.unwrap();
	assert_eq!(response.text(), "detail 34");
}

#[tokio::test]
async fn test_dispatch_vote_redirects_to_results() {
	let router = polls_router();
	let request = Request::builder()
		.method(hyper::Method::POST)
		.uri("/polls/5/vote/")
		.build()
		.unwrap();
	let response = router.route(request).await.unwrap();
	assert_eq!(response.status, hyper::StatusCode::FOUND);
	assert_eq!(
		response.headers.get("location").unwrap().to_str().unwrap(),
		"/polls/5/results/"
	);
}

#[tokio::test]
async fn test_dispatch_miss() {
	let router = polls_router();
	let request = Request::builder().uri("/polls/abc/").build().unwrap();
	assert!(matches!(
		router.route(request).await,
		Err(Error::NotFound(_))
	));
}
