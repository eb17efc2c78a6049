mod config;

use anyhow::Context;
use pictor_engine::GeometryFactory;
use pictor_engine::batch::{BlendMode, GpuVertex, ShaderId};
use pictor_engine::coords::{Polygon, Rect, Rotation, Vec2};
use pictor_engine::effect::{BlendEffect, EffectSet, ShaderEffect};
use pictor_engine::factory::DrawFlags;
use pictor_engine::logging::{LoggingConfig, init_logging};
use pictor_engine::paint::Color;
use pictor_engine::scene::{BatchList, GroupId};
use pictor_engine::texture::{Texture, TextureId, TextureRef};

use config::StudioConfig;

const HUD: GroupId = GroupId::new(10);

fn main() -> anyhow::Result<()> {
    let config = StudioConfig::from_env()?;
    init_logging(LoggingConfig {
        env_filter: config.log_filter.clone(),
        ..LoggingConfig::default()
    });
    log::info!("pictor studio: {} frames", config.frames);

    let atlas = Texture::labeled(TextureId(1), 256, 128, "atlas").context("loading atlas")?;
    let backdrop = Texture::labeled(TextureId(2), 640, 360, "backdrop").context("loading backdrop")?;

    let mut list = BatchList::new();

    // Retained backdrop: submitted once, kept across frames.
    {
        let mut factory = GeometryFactory::new(&mut list);
        factory.set_depth(-1.0);
        let handle = factory.draw_texture_simple(&backdrop, Vec2::ZERO)?;
        handle.borrow_mut().set_immediate(false);
    }

    for frame in 0..config.frames {
        draw_frame(&mut list, &atlas, frame as f32)?;
        report(frame, &mut list);
        list.end_frame();
    }

    log::info!("done; {} batches retained", list.len());
    Ok(())
}

fn draw_frame(list: &mut BatchList, atlas: &TextureRef, t: f32) -> anyhow::Result<()> {
    let mut factory = GeometryFactory::new(list);

    factory.draw_line(
        Vec2::new(0.0, 180.0),
        Vec2::new(640.0, 180.0),
        Color::RED,
        Color::BLUE,
    )?;
    factory.draw_rectangle(
        Rect::new(20.0, 20.0, 120.0, 60.0),
        Color::WHITE,
        Color::RED,
        Color::GREEN,
        Color::BLUE,
    )?;
    factory.draw_polygon(
        &Polygon::regular(Vec2::new(320.0, 180.0), 40.0, 6),
        Color::rgb(0.9, 0.8, 0.2),
    )?;
    factory.draw_textured_polygon(
        &Polygon::regular(Vec2::new(480.0, 200.0), 32.0, 5),
        atlas,
        Color::WHITE,
        false,
    )?;

    factory.set_group(HUD);
    factory.set_effects(
        EffectSet::new()
            .with(ShaderEffect(ShaderId(1)))
            .with(BlendEffect(BlendMode::Premultiplied)),
    );
    factory.draw_texture(
        atlas,
        Vec2::new(500.0, 20.0),
        Rotation::from_degrees(15.0 * t),
        Vec2::splat(0.5),
        Color::new(1.0, 1.0, 1.0, 0.8),
        DrawFlags::HFLIP,
    )?;
    factory.draw_texture_part(
        atlas,
        Vec2::new(20.0, 300.0),
        Rect::new(32.0, 0.0, 32.0, 32.0),
        Rotation::IDENTITY,
        Vec2::ONE,
        Color::WHITE,
        DrawFlags::empty(),
    )?;

    Ok(())
}

fn report(frame: u32, list: &mut BatchList) {
    let vertices = list.vertex_count();
    log::info!(
        "frame {frame}: {} batches, {vertices} vertices ({} bytes)",
        list.len(),
        vertices * std::mem::size_of::<GpuVertex>()
    );

    for handle in list.iter_in_draw_order() {
        let batch = handle.borrow();
        log::debug!(
            "  {:?} depth {} {:?}: {} vertices, {} indices, texture {:?}, shader {:?}",
            batch.group(),
            batch.depth(),
            batch.topology(),
            batch.len(),
            batch.triangle_indices().len(),
            batch.texture().and_then(|t| t.label()),
            batch.shader(),
        );
    }
}
