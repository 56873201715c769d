// IntSar-3D transforms demo: builds a model-view-projection chain and steps it

use glam::{Quat, Vec3};
use intsar_transform::{
    shared, CachedTransform, LookAtTransform, ModelTransform, Order, PerspectiveTransform,
    SharedTransform, SimpleTransform, Transform, TransformList, TransformUniform,
};

const FRAMES: u32 = 4;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let camera = LookAtTransform::new(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y);
    let projection = shared(PerspectiveTransform::new(45.0, 16.0 / 9.0, 0.1, 100.0)?);
    let view = shared(SimpleTransform::new(camera.matrix().inverse()));
    let model = shared(ModelTransform::identity());

    let mvp = TransformList::from_items(
        [
            projection.clone() as SharedTransform,
            view.clone() as SharedTransform,
            model.clone() as SharedTransform,
        ],
        Order::Direct,
    );
    let mut frame_mvp = CachedTransform::new(Some(shared(mvp)));

    for frame in 0..FRAMES {
        let angle = frame as f32 * 0.25;
        model.borrow_mut().rotation = Quat::from_rotation_y(angle);
        frame_mvp.recalc();

        let uniform = TransformUniform::from_transform(&frame_mvp);
        log::info!("frame {}: mvp = {:?}", frame, uniform.matrix);
    }

    // widen the far plane before pulling the near plane in
    let mut projection = projection.borrow_mut();
    projection.set_far(500.0)?;
    projection.set_near(0.01)?;
    log::info!(
        "projection now near {} far {}",
        projection.near(),
        projection.far()
    );

    Ok(())
}
