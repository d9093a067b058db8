//! Command handlers for the CLI.
//!
//! These are called from `main` after config and logging are established.
//! Permission denials and empty search outcomes are expected results, so they
//! print a message and exit cleanly instead of propagating as errors.

use chrono::Local;

use mukpick_core::{AppConfig, Prefs};
use mukpick_engine::{CategoryPicker, Recommendation, Recommender, WorkflowError};
use mukpick_geo::{
    GeocodeClient, LocationResolver, LocationSource, PermissionState, PositionProvider,
    ResolvedLocation, StaticPermissionGate,
};
use mukpick_naver::NaverClient;

fn build_resolver<P: PositionProvider>(
    config: &AppConfig,
    provider: P,
) -> anyhow::Result<LocationResolver<P>> {
    let geocode = GeocodeClient::new(config.http_timeout_secs)?;
    Ok(LocationResolver::new(
        provider,
        geocode,
        config.position_timeout_secs,
        config.locality_language.clone(),
    ))
}

fn build_naver(config: &AppConfig) -> anyhow::Result<NaverClient> {
    Ok(NaverClient::new(
        &config.naver_client_id,
        &config.naver_client_secret,
        config.http_timeout_secs,
    )?)
}

fn print_location(resolved: &ResolvedLocation) {
    match resolved.source {
        LocationSource::Device => println!("현재 위치: {}", resolved.info),
        LocationSource::Fallback => {
            println!("현재 위치: {} (기본 위치로 대체됨)", resolved.info);
        }
    }
}

/// Run the full recommendation workflow once and print the pick.
pub(crate) async fn run_recommend<P: PositionProvider>(
    config: &AppConfig,
    provider: P,
    permission: PermissionState,
    category: Option<&str>,
    with_photo: bool,
) -> anyhow::Result<()> {
    let mut recommender = Recommender::new(
        StaticPermissionGate::new(permission),
        build_resolver(config, provider)?,
        build_naver(config)?,
        CategoryPicker::from_entropy(),
    );

    let outcome = match category {
        Some(category) => recommender.recommend_in_category(category, with_photo).await,
        None => recommender.recommend(with_photo).await,
    };
    match outcome {
        Ok(Recommendation::Venue {
            restaurant,
            category,
            photo,
        }) => {
            if let Some(resolved) = recommender.location() {
                print_location(&resolved);
            }
            println!("오늘의 추천: {} ({category})", restaurant.plain_title());
            if !restaurant.road_address.is_empty() {
                println!("주소: {}", restaurant.road_address);
            } else if !restaurant.address.is_empty() {
                println!("주소: {}", restaurant.address);
            }
            if !restaurant.telephone.is_empty() {
                println!("전화: {}", restaurant.telephone);
            }
            if !restaurant.link.is_empty() {
                println!("링크: {}", restaurant.link);
            }
            if let Some(url) = photo {
                println!("사진: {url}");
            }
            Ok(())
        }
        Ok(Recommendation::NoMatch { category }) => {
            println!("'{category}' 주변 맛집을 찾지 못했어요. 다시 실행해 보세요.");
            Ok(())
        }
        Err(WorkflowError::PermissionDenied(PermissionState::Blocked)) => {
            println!("위치 권한이 차단되어 있어요. 시스템 설정에서 허용해 주세요.");
            Ok(())
        }
        Err(WorkflowError::PermissionDenied(_)) => {
            println!("위치 권한이 거부되어 추천을 진행할 수 없어요.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Resolve the current location and print it, including provenance.
pub(crate) async fn run_locate<P: PositionProvider>(
    config: &AppConfig,
    provider: P,
) -> anyhow::Result<()> {
    let resolver = build_resolver(config, provider)?;
    let resolved = resolver.resolve().await;
    print_location(&resolved);
    println!(
        "좌표: {:.4}, {:.4}",
        resolved.info.latitude, resolved.info.longitude
    );
    Ok(())
}

/// Search venues for an explicit category near the resolved location.
pub(crate) async fn run_search<P: PositionProvider>(
    config: &AppConfig,
    provider: P,
    category: &str,
    keyword: &str,
) -> anyhow::Result<()> {
    let resolver = build_resolver(config, provider)?;
    let naver = build_naver(config)?;

    let resolved = resolver.resolve().await;
    print_location(&resolved);

    let candidates = naver.search_nearby(&resolved.info, category, keyword).await;
    if candidates.is_empty() {
        println!("'{category}' 검색 결과가 없어요.");
        return Ok(());
    }
    for restaurant in &candidates {
        let address = if restaurant.road_address.is_empty() {
            &restaurant.address
        } else {
            &restaurant.road_address
        };
        println!("- {} | {address}", restaurant.plain_title());
    }
    Ok(())
}

/// Daily attendance check-in backed by the local prefs file.
pub(crate) fn run_attendance(config: &AppConfig) -> anyhow::Result<()> {
    let mut prefs = Prefs::load(&config.prefs_path)?;
    let today = Local::now().date_naive();

    if prefs.should_show_attendance(today) {
        prefs.record_visit(today);
        prefs.save(&config.prefs_path)?;
        println!("출석 체크 완료! 오늘도 맛있는 하루 되세요.");
    } else {
        println!("오늘은 이미 출석했어요.");
    }
    Ok(())
}
