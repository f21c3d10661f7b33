//! ## Derivation
//!
//! Let $\mathbf{n}\_{1}, \mathbf{n}\_{2} \in \mathbb{R}^{N}$ be an orthonormal pair
//! and let $P$ be the plane they span. Any vector splits into a part inside
//! the plane and a part orthogonal to it,
//!
//! $$
//! \mathbf{v} = c_{1}\mathbf{n}\_{1} + c_{2}\mathbf{n}\_{2} + \mathbf{v}\_{\perp},\\;\\;
//! c_{k} = \mathbf{n}\_{k}^{\top}\mathbf{v}.
//! $$
//!
//! A rotation by $\theta$ in $P$ leaves $\mathbf{v}\_{\perp}$ alone and turns the
//! in-plane coordinates like a 2D rotation,
//!
//! $$
//! \begin{bmatrix}
//! c_{1}' \\\\
//! c_{2}'
//! \end{bmatrix}
//! =
//! \begin{bmatrix}
//! \cos\theta & -\sin\theta \\\\
//! \sin\theta & \cos\theta
//! \end{bmatrix}
//! \begin{bmatrix}
//! c_{1} \\\\
//! c_{2}
//! \end{bmatrix}.
//! $$
//!
//! Writing $\mathbf{v}' = \mathbf{v} + (c_{1}' - c_{1})\mathbf{n}\_{1} + (c_{2}' - c_{2})\mathbf{n}\_{2}$
//! and collecting the $\sin\theta$ and $\cos\theta - 1$ terms gives
//!
//! $$
//! \mathbf{v}'
//! = \mathbf{v}
//! + (c_{1}\mathbf{n}\_{2} - c_{2}\mathbf{n}\_{1})\sin\theta
//! + (c_{1}\mathbf{n}\_{1} + c_{2}\mathbf{n}\_{2})(\cos\theta - 1),
//! $$
//!
//! which is what [`rotate_vector`](crate::rotate_vector) evaluates. It needs two
//! dot products and two scaled additions, so it is $O(N)$.
//!
//! Substituting $c_{k} = \mathbf{n}\_{k}^{\top}\mathbf{v}$ and factoring out
//! $\mathbf{v}$ yields the matrix form used by
//! [`rotation_matrix`](crate::rotation_matrix),
//!
//! $$
//! M = I
//! + (\mathbf{n}\_{2}\mathbf{n}\_{1}^{\top} - \mathbf{n}\_{1}\mathbf{n}\_{2}^{\top})\sin\theta
//! + (\mathbf{n}\_{1}\mathbf{n}\_{1}^{\top} + \mathbf{n}\_{2}\mathbf{n}\_{2}^{\top})(\cos\theta - 1).
//! $$
//!
//! The middle term $K = \mathbf{n}\_{2}\mathbf{n}\_{1}^{\top} - \mathbf{n}\_{1}\mathbf{n}\_{2}^{\top}$
//! is skew-symmetric and the last one, $K^{2} = -(\mathbf{n}\_{1}\mathbf{n}\_{1}^{\top} +
//! \mathbf{n}\_{2}\mathbf{n}\_{2}^{\top})$, is minus the projector onto $P$. Hence
//!
//! $$
//! M = I + K\sin\theta + K^{2}(1 - \cos\theta) = \exp(\theta K),
//! $$
//!
//! the Rodrigues formula without a cross product. For $N = 3$, $K$ is the
//! cross product matrix of $\mathbf{n}\_{1} \times \mathbf{n}\_{2}$ and $M$ is the
//! rotation about that axis by $\theta$.
//!
//! ## Recovering the angle
//!
//! Restricting $M$ to the plane basis,
//!
//! $$
//! B_{ij} = \mathbf{n}\_{i}^{\top} M \mathbf{n}\_{j},
//! $$
//!
//! gives back the $2 \times 2$ rotation above, so
//! $\theta = \mathrm{atan2}(B_{21}, B_{11})$ up to a multiple of $2\pi$. See
//! [`so2::plane_block`](crate::so2::plane_block).
